use error_chain::error_chain;

error_chain! {
    foreign_links {
        HttpRequest(reqwest::Error);
        Url(url::ParseError);
        Json(serde_json::Error);
    }

    errors {
        MissingConfig(name: String) {
            description("missing configuration"),
            display("missing configuration: {} is not set", name),
        }

        InvalidColor(text: String) {
            description("invalid embed color"),
            display("invalid embed color: {:?}", text),
        }

        NoEmbeds {
            description("no embeds to send"),
            display("a webhook payload needs at least one embed"),
        }

        WebhookRejected(status: u16, body: String) {
            description("webhook rejected the payload"),
            display("webhook rejected the payload with status {}: {}", status, body),
        }
    }
}
