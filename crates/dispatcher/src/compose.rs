//! Message composition.

use source_core::{Client, Template};

/// Render a template for a client, producing the message text handed
/// to the external messaging application.
pub fn compose(template: &Template, client: &Client) -> String {
    template.render(&client.name)
}
