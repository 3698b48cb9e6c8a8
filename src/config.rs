use std::env;

use serde::Deserialize;
use url::Url;

use crate::embed::MessageEmbed;
use crate::errors::*;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorConfig {
    pub name: String,
    pub icon_url: String,
}

/// Everything the `discord-embed` binary needs, read from `EMBED_*`
/// environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub webhook_url: Url,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub color: Option<i64>,
    pub footer_text: Option<String>,
    pub footer_icon_url: Option<String>,
    pub author: Option<AuthorConfig>,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub timestamp: Option<String>,
    pub fields: Vec<FieldConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook = lookup("EMBED_WEBHOOK_URL")
            .ok_or_else(|| ErrorKind::MissingConfig("EMBED_WEBHOOK_URL".to_owned()))?;
        let webhook_url = Url::parse(&webhook)?;

        let color = lookup("EMBED_COLOR").map(|c| parse_color(&c)).transpose()?;
        let author = lookup("EMBED_AUTHOR_NAME").map(|name| AuthorConfig {
            name,
            icon_url: lookup("EMBED_AUTHOR_ICON_URL").unwrap_or_default(),
        });
        let fields = match lookup("EMBED_FIELDS") {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)?,
            _ => Vec::new(),
        };

        Ok(Self {
            webhook_url,
            title: lookup("EMBED_TITLE"),
            description: lookup("EMBED_DESCRIPTION"),
            url: lookup("EMBED_URL"),
            color,
            footer_text: lookup("EMBED_FOOTER_TEXT"),
            footer_icon_url: lookup("EMBED_FOOTER_ICON_URL"),
            author,
            image: lookup("EMBED_IMAGE"),
            thumbnail: lookup("EMBED_THUMBNAIL"),
            timestamp: lookup("EMBED_TIMESTAMP"),
            fields,
        })
    }

    pub fn build_embed(&self) -> MessageEmbed {
        let mut embed = MessageEmbed::new();
        if let Some(title) = &self.title {
            embed.set_title(title.as_str());
        }
        if let Some(description) = &self.description {
            embed.set_description(description.as_str());
        }
        if let Some(url) = &self.url {
            embed.set_url(url.as_str());
        }
        if let Some(color) = self.color {
            embed.set_color(color);
        }
        if let Some(text) = &self.footer_text {
            embed.set_footer_text(text.as_str());
        }
        if let Some(icon_url) = &self.footer_icon_url {
            embed.set_footer_icon_url(icon_url.as_str());
        }
        for field in &self.fields {
            embed.add_field(field.name.as_str(), field.value.as_str(), field.inline);
        }
        if let Some(image) = &self.image {
            embed.set_image(image.as_str());
        }
        if let Some(thumbnail) = &self.thumbnail {
            embed.set_thumbnail(thumbnail.as_str());
        }
        if let Some(author) = &self.author {
            embed.set_author(author.name.as_str(), author.icon_url.as_str());
        }
        match self.timestamp.as_deref() {
            Some("now") => {
                embed.set_timestamp_now();
            }
            Some(text) => {
                embed.set_timestamp(text);
            }
            None => {}
        }
        embed
    }
}

/// Accepts `12425274`, `0xBD983A` or `#BD983A`.
pub fn parse_color(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    let parsed = if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or_else(|| trimmed.strip_prefix('#'))
    {
        i64::from_str_radix(hex, 16)
    } else {
        trimmed.parse::<i64>()
    };
    parsed.map_err(|_| ErrorKind::InvalidColor(text.to_owned()).into())
}
