//! Shop settings model

use serde::{Deserialize, Serialize};

/// Shop configuration (singleton record).
///
/// Missing fields in persisted data fall back to the defaults below at
/// deserialization time, so every loaded record is fully populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopSettings {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_phone")]
    pub phone: String,
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_email")]
    pub email: String,
    /// Path to a logo image, if one has been configured
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default = "default_invoice_prefix")]
    pub invoice_prefix: String,
    /// Tax rate as a percentage (0 disables tax)
    #[serde(default)]
    pub tax_rate: f64,
}

fn default_name() -> String {
    "QuickPrint Pro".to_string()
}

fn default_phone() -> String {
    "0300-1234567".to_string()
}

fn default_address() -> String {
    "Shop #12, Digital Plaza, Mall Road, Lahore".to_string()
}

fn default_email() -> String {
    "contact@quickprintpk.com".to_string()
}

fn default_invoice_prefix() -> String {
    "RT-2024-".to_string()
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            phone: default_phone(),
            address: default_address(),
            email: default_email(),
            logo_path: None,
            invoice_prefix: default_invoice_prefix(),
            tax_rate: 0.0,
        }
    }
}

/// Update settings payload (settings form submission)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShopSettingsUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub logo_path: Option<String>,
    pub invoice_prefix: Option<String>,
    pub tax_rate: Option<f64>,
}

impl ShopSettingsUpdate {
    /// Apply this patch on top of an existing record.
    pub fn apply(self, settings: &mut ShopSettings) {
        if let Some(name) = self.name {
            settings.name = name;
        }
        if let Some(phone) = self.phone {
            settings.phone = phone;
        }
        if let Some(address) = self.address {
            settings.address = address;
        }
        if let Some(email) = self.email {
            settings.email = email;
        }
        if let Some(logo_path) = self.logo_path {
            settings.logo_path = Some(logo_path);
        }
        if let Some(invoice_prefix) = self.invoice_prefix {
            settings.invoice_prefix = invoice_prefix;
        }
        if let Some(tax_rate) = self.tax_rate {
            settings.tax_rate = tax_rate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        // A record persisted before tax_rate existed
        let settings: ShopSettings =
            serde_json::from_str(r#"{"name":"Foto Press","logo_path":null}"#).unwrap();
        assert_eq!(settings.name, "Foto Press");
        assert_eq!(settings.invoice_prefix, "RT-2024-");
        assert_eq!(settings.tax_rate, 0.0);
    }

    #[test]
    fn test_update_apply() {
        let mut settings = ShopSettings::default();
        ShopSettingsUpdate {
            invoice_prefix: Some("QP-2026-".to_string()),
            tax_rate: Some(5.0),
            ..Default::default()
        }
        .apply(&mut settings);

        assert_eq!(settings.invoice_prefix, "QP-2026-");
        assert_eq!(settings.tax_rate, 5.0);
        // Untouched fields keep their values
        assert_eq!(settings.name, "QuickPrint Pro");
    }
}
