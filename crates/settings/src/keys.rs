//! Canonical setting keys.
//!
//! One key per logical column alias plus the credentials and collection
//! identifiers for each backend. Every key maps to a plain string value.

/// Which backend is active: `"notion"` or `"airtable"`.
pub const DATA_SOURCE: &str = "data_source";

// Notion-shaped backend
pub const NOTION_API_KEY: &str = "notion_api_key";
pub const NOTION_CLIENT_DB_ID: &str = "notion_client_db_id";
pub const NOTION_NAME_COLUMN: &str = "notion_name_column";
pub const NOTION_PHONE_COLUMN: &str = "notion_phone_column";
pub const NOTION_TEMPLATE_DB_ID: &str = "notion_template_db_id";
pub const NOTION_TITLE_COLUMN: &str = "notion_title_column";
pub const NOTION_CONTENT_COLUMN: &str = "notion_content_column";
pub const NOTION_APPOINTMENT_DB_ID: &str = "notion_appointment_db_id";
pub const NOTION_APPOINTMENT_DATE_COLUMN: &str = "notion_appointment_date_column";
pub const NOTION_APPOINTMENT_NAME_COLUMN: &str = "notion_appointment_name_column";
pub const NOTION_APPOINTMENT_PHONE_COLUMN: &str = "notion_appointment_phone_column";
pub const NOTION_APPOINTMENT_HOUR_COLUMN: &str = "notion_appointment_hour_column";
pub const NOTION_APPOINTMENT_PETS_COLUMN: &str = "notion_appointment_pets_column";
pub const NOTION_APPOINTMENT_STATUS_COLUMN: &str = "notion_appointment_status_column";
pub const NOTION_APPOINTMENT_NO_SHOW_STATUS: &str = "notion_appointment_no_show_status";
pub const NOTION_APPOINTMENT_SMS_SENT_COLUMN: &str = "notion_appointment_sms_sent_column";
pub const NOTION_APPOINTMENT_NO_SHOW_SMS_SENT_COLUMN: &str =
    "notion_appointment_no_show_sms_sent_column";

// Airtable-shaped backend
pub const AIRTABLE_PAT: &str = "airtable_pat";
pub const AIRTABLE_BASE_ID: &str = "airtable_base_id";
pub const AIRTABLE_CLIENT_TABLE: &str = "airtable_client_table";
pub const AIRTABLE_NAME_COLUMN: &str = "airtable_name_column";
pub const AIRTABLE_PHONE_COLUMN: &str = "airtable_phone_column";
pub const AIRTABLE_TEMPLATE_TABLE: &str = "airtable_template_table";
pub const AIRTABLE_TITLE_COLUMN: &str = "airtable_title_column";
pub const AIRTABLE_CONTENT_COLUMN: &str = "airtable_content_column";
pub const AIRTABLE_APPOINTMENT_TABLE: &str = "airtable_appointment_table";
pub const AIRTABLE_APPOINTMENT_DATE_COLUMN: &str = "airtable_appointment_date_column";
pub const AIRTABLE_APPOINTMENT_NAME_COLUMN: &str = "airtable_appointment_name_column";
pub const AIRTABLE_APPOINTMENT_PHONE_COLUMN: &str = "airtable_appointment_phone_column";
pub const AIRTABLE_APPOINTMENT_HOUR_COLUMN: &str = "airtable_appointment_hour_column";
pub const AIRTABLE_APPOINTMENT_PETS_COLUMN: &str = "airtable_appointment_pets_column";
pub const AIRTABLE_APPOINTMENT_STATUS_COLUMN: &str = "airtable_appointment_status_column";
pub const AIRTABLE_APPOINTMENT_NO_SHOW_STATUS: &str = "airtable_appointment_no_show_status";
pub const AIRTABLE_APPOINTMENT_SMS_SENT_COLUMN: &str = "airtable_appointment_sms_sent_column";
pub const AIRTABLE_APPOINTMENT_NO_SHOW_SMS_SENT_COLUMN: &str =
    "airtable_appointment_no_show_sms_sent_column";
