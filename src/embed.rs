use serde::{Serialize, Serializer};

use crate::document::{Map, Value};
use crate::timestamp::Timestamp;

/// Fluent builder for a Discord message embed.
///
/// Every setter writes straight into the underlying document and hands the
/// builder back, so calls can be chained:
///
/// ```
/// use discord_embed::MessageEmbed;
///
/// let mut embed = MessageEmbed::new();
/// embed
///     .set_title("Deploy finished")
///     .set_color(0xBD983A)
///     .add_field("Region", "eu-west", true);
/// let document = embed.get_embed();
/// assert_eq!(document.len(), 3);
/// ```
///
/// Nothing is validated. Values the Discord API would reject (an invalid
/// URL, a color outside 24 bits, a malformed timestamp) are stored as given.
/// `image` and `thumbnail` are not meant to be combined, but setting both
/// keeps both.
///
/// A builder is not meant to be shared: build it on one thread and hand off
/// the finished document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageEmbed {
    embed: Map,
}

impl MessageEmbed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.embed.insert("title", title.into());
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.embed.insert("description", description.into());
        self
    }

    pub fn set_color(&mut self, color: i64) -> &mut Self {
        self.embed.insert("color", color);
        self
    }

    /// Sets the link the title points to.
    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.embed.insert("url", url.into());
        self
    }

    pub fn set_footer_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.embed.map_mut("footer").insert("text", text.into());
        self
    }

    pub fn set_footer_icon_url(&mut self, icon_url: impl Into<String>) -> &mut Self {
        self.embed.map_mut("footer").insert("icon_url", icon_url.into());
        self
    }

    /// Appends a field. Fields render in the order they were added.
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> &mut Self {
        let mut field = Map::new();
        field.insert("name", name.into());
        field.insert("value", value.into());
        field.insert("inline", inline);

        self.embed.seq_mut("fields").push(Value::Map(field));
        self
    }

    pub fn set_image(&mut self, url: impl Into<String>) -> &mut Self {
        self.embed.map_mut("image").insert("url", url.into());
        self
    }

    pub fn set_thumbnail(&mut self, url: impl Into<String>) -> &mut Self {
        self.embed.map_mut("thumbnail").insert("url", url.into());
        self
    }

    /// Sets the author block. Pass an empty `icon_url` for an author without
    /// an icon.
    pub fn set_author(
        &mut self,
        name: impl Into<String>,
        icon_url: impl Into<String>,
    ) -> &mut Self {
        let author = self.embed.map_mut("author");
        author.insert("name", name.into());
        author.insert("icon_url", icon_url.into());
        self
    }

    /// Sets the embed timestamp.
    ///
    /// Points in time are written as `YYYY-MM-DDTHH:MM:SSZ` in UTC. Text is
    /// stored as-is, except that empty text (like `None` or
    /// [`Timestamp::Now`]) stamps the current time.
    pub fn set_timestamp(&mut self, timestamp: impl Into<Timestamp>) -> &mut Self {
        self.embed.insert("timestamp", timestamp.into().resolve());
        self
    }

    pub fn set_timestamp_now(&mut self) -> &mut Self {
        self.set_timestamp(Timestamp::Now)
    }

    /// Returns a snapshot of the document built so far.
    pub fn get_embed(&self) -> Map {
        self.embed.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.embed.is_empty()
    }
}

impl From<MessageEmbed> for Map {
    fn from(embed: MessageEmbed) -> Self {
        embed.embed
    }
}

impl Serialize for MessageEmbed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.embed.serialize(serializer)
    }
}
