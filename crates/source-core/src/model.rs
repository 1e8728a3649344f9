//! Domain entities produced by record mapping.

use serde::{Deserialize, Serialize};

/// Placeholder token substituted with the client's name at compose time.
pub const CLIENT_NAME_PLACEHOLDER: &str = "{clientName}";

/// One client row from the active backend.
///
/// Identity is the backend record id (stable per backend, not globally
/// unique across backends). A `Client` is only materialized when both
/// name and phone are non-empty; the appointment fields are populated
/// by the appointment mapper and stay absent/false elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Backend record id.
    pub id: String,
    /// Client display name.
    pub name: String,
    /// Phone number, as stored in the backend.
    pub phone: String,
    /// Appointment time for the queried day, e.g. `"9h"` or `"09:30"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_time: Option<String>,
    /// Pet names, list values joined with `", "`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pets: Option<String>,
    /// Whether the reminder SMS was already sent.
    #[serde(default)]
    pub sms_sent: bool,
    /// Whether the no-show follow-up SMS was already sent.
    #[serde(default)]
    pub no_show_sms_sent: bool,
}

impl Client {
    /// Create a plain (non-appointment) client.
    pub fn new(id: impl Into<String>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            appointment_time: None,
            pets: None,
            sms_sent: false,
            no_show_sms_sent: false,
        }
    }
}

/// An SMS template. Immutable once mapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Backend record id.
    pub id: String,
    /// Short label shown to the operator.
    pub title: String,
    /// Message body, carrying the `{clientName}` placeholder.
    pub content: String,
}

impl Template {
    /// Render the template for a client, substituting every occurrence
    /// of the placeholder.
    ///
    /// # Example
    ///
    /// ```rust
    /// use source_core::Template;
    ///
    /// let t = Template {
    ///     id: "1".to_string(),
    ///     title: "Rappel".to_string(),
    ///     content: "Bonjour {clientName}".to_string(),
    /// };
    /// assert_eq!(t.render("Léa"), "Bonjour Léa");
    /// ```
    pub fn render(&self, client_name: &str) -> String {
        self.content.replace(CLIENT_NAME_PLACEHOLDER, client_name)
    }
}

/// Built-in template pack, used as a fallback when the templates
/// collection is unconfigured or yields nothing.
pub fn default_templates() -> Vec<Template> {
    let seed = [
        (
            "1",
            "Merci de votre visite",
            "Bonjour {clientName}, merci pour votre visite ! Nous espérons que tout s'est bien passé et nous avons hâte de vous revoir bientôt.",
        ),
        (
            "2",
            "Absence au rendez-vous",
            "Bonjour {clientName}, nous avons remarqué votre absence à votre rendez-vous aujourd'hui. Souhaitez-vous que nous en planifions un nouveau ?",
        ),
        (
            "3",
            "Demande d'avis Google",
            "Bonjour {clientName}, votre avis est précieux ! Pourriez-vous prendre un instant pour nous laisser un commentaire sur Google ? Cela nous aide énormément. Merci ! [Lien vers Google]",
        ),
        (
            "4",
            "Rappel de Rendez-vous",
            "Bonjour {clientName}, nous vous confirmons votre rendez-vous pour le [DATE] à [HEURE]. En cas d'empêchement, merci de nous prévenir. À bientôt !",
        ),
        (
            "5",
            "Demande de Prépaiement ⚠️",
            "Bonjour {clientName}, afin de confirmer votre rendez-vous, un prépaiement est nécessaire. Merci de le régler via ce lien : [LIEN DE PAIEMENT]",
        ),
        (
            "6",
            "⛔️ Pas venu",
            "Bonjour {clientName}, nous avons remarqué votre absence à votre rendez-vous d'aujourd'hui. Souhaitez-vous que nous en planifions un nouveau ?",
        ),
    ];

    seed.iter()
        .map(|(id, title, content)| Template {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        })
        .collect()
}
