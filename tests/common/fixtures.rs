use serde_json::{json, Value};
use shiplabel::LabelRecord;

/// `n` records, each with a distinct vertical `V<n>` so that labels can be
/// told apart on the page.
pub fn numbered_records(n: usize) -> Vec<LabelRecord> {
    LabelRecord::samples(n)
        .into_iter()
        .enumerate()
        .map(|(i, record)| LabelRecord { vertical: Some(format!("V{}", i)), ..record })
        .collect()
}

/// One record as upstream JSON.
pub fn record_json(sequence: u64) -> Value {
    json!({
        "vertical": "SALE",
        "sequence": sequence,
        "priority": sequence % 2 == 0,
        "priorityName": "PRIORITY",
        "tripId": format!("TRIP-{}", sequence),
        "carrier": "CARRIER",
        "shipmentDisplayId": format!("SHP-{}", sequence),
        "awb": format!("AWB{:06}", sequence),
        "shipmentType": "DELIVERY",
        "packageName": "Box",
        "itemName": "Sample Item",
        "userDetails": "Jane Doe, 12 Main Street",
        "returnAddress": "Returns Desk",
        "dispatchFcAddress": "FC North",
        "dispatchPincode": 451001,
        "returnPincode": 460876
    })
}
