//! Home page rendering
//!
//! One embedded template. The `.html` name turns on minijinja's HTML
//! auto-escaping, so message text cannot inject markup.

use minijinja::{context, Environment};

use crate::db::Message;

const INDEX_TEMPLATE_NAME: &str = "index.html";
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Compiled page templates
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render the home page listing `messages`.
    pub fn index(&self, messages: &[Message]) -> Result<String, minijinja::Error> {
        self.env
            .get_template(INDEX_TEMPLATE_NAME)?
            .render(context! { messages => messages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(id: i64, text: Option<&str>) -> Message {
        Message {
            id,
            message: text.map(str::to_owned),
        }
    }

    #[test]
    fn lists_every_message() {
        let templates = Templates::new().unwrap();
        let html = templates
            .index(&[msg(1, Some("hello")), msg(2, Some("world"))])
            .unwrap();
        assert!(html.contains("hello"));
        assert!(html.contains("world"));
        assert!(html.contains(r#"name="new_message""#));
    }

    #[test]
    fn escapes_markup() {
        let templates = Templates::new().unwrap();
        let html = templates
            .index(&[msg(1, Some("<script>alert(1)</script>"))])
            .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn null_message_renders_empty_item() {
        let templates = Templates::new().unwrap();
        let html = templates.index(&[msg(1, None)]).unwrap();
        assert!(!html.contains("none"));
        assert!(html.contains(r#"<li class="message"></li>"#));
    }

    #[test]
    fn empty_board_shows_placeholder() {
        let templates = Templates::new().unwrap();
        let html = templates.index(&[]).unwrap();
        assert!(html.contains("No messages yet"));
    }
}
