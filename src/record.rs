use serde::{Deserialize, Serialize};

/// The attributes printed on one shipping label.
///
/// Records arrive from upstream as JSON (camelCase keys) and are only ever
/// read. Optional fields stay optional here; whether a field is required is
/// decided when the label is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelRecord {
    pub vertical: Option<String>,
    pub sequence: Option<u64>,
    pub priority: bool,
    pub priority_name: Option<String>,
    pub trip_id: Option<String>,
    pub carrier: Option<String>,
    pub shipment_display_id: Option<String>,
    /// Tracking identifier, also encoded as the barcode.
    pub awb: Option<String>,
    pub shipment_type: Option<String>,
    pub package_name: Option<String>,
    pub item_name: Option<String>,
    pub user_details: Option<String>,
    pub seller_name: String,
    pub seller_address: String,
    pub return_address: Option<String>,
    pub dispatch_fc_address: Option<String>,
    pub dispatch_pincode: Option<u32>,
    pub return_pincode: Option<u32>,
    pub footer: Option<String>,
}

impl Default for LabelRecord {
    fn default() -> Self {
        Self {
            vertical: None,
            sequence: None,
            priority: false,
            priority_name: None,
            trip_id: None,
            carrier: None,
            shipment_display_id: None,
            awb: None,
            shipment_type: None,
            package_name: None,
            item_name: None,
            user_details: None,
            seller_name: "Dummy Seller".to_string(),
            seller_address: "Dummy Seller Address".to_string(),
            return_address: None,
            dispatch_fc_address: None,
            dispatch_pincode: None,
            return_pincode: None,
            footer: None,
        }
    }
}

impl LabelRecord {
    /// A fully populated record used by the CLI's `--sample` mode and tests.
    pub fn sample() -> Self {
        let package_count = 4;
        Self {
            vertical: Some("SALE".into()),
            sequence: Some(1),
            priority: true,
            priority_name: Some("PRIORITY".into()),
            trip_id: Some("TRIP-123456".into()),
            carrier: Some("CARRIER".into()),
            shipment_display_id: Some("SHP-123456".into()),
            awb: Some("AWB123456".into()),
            shipment_type: Some("DELIVERY".into()),
            package_name: Some("Dummy name".into()),
            item_name: Some("Sample Item 1".into()),
            user_details: Some("Dummy User Details".into()),
            return_address: Some("Dummy return address".into()),
            dispatch_fc_address: Some("Dummy address".into()),
            dispatch_pincode: Some(451001),
            return_pincode: Some(460876),
            footer: Some(format!(
                "For Warehouse use only: SKU: {} (Box {} of {})",
                "Dummy package name", 1, package_count
            )),
            ..Self::default()
        }
    }

    /// `count` sample records with sequences `1..=count` and distinct
    /// shipment ids.
    pub fn samples(count: usize) -> Vec<Self> {
        (1..=count)
            .map(|n| Self {
                sequence: Some(n as u64),
                shipment_display_id: Some(format!("SHP-{:06}", n)),
                awb: Some(format!("AWB{:06}", n)),
                ..Self::sample()
            })
            .collect()
    }

    /// Label text for the priority marker.
    pub fn priority_label(&self) -> &str {
        if self.priority {
            self.priority_name.as_deref().unwrap_or("PRIORITY")
        } else {
            "STANDARD"
        }
    }
}
