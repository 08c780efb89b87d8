//! Turning a [`LabelRecord`] into a measured [`Block`].

use crate::record::LabelRecord;
use itertools::Itertools;
use shiplabel_block::{
    encode_code128, layout, Block, BlockError, BlockNode, Cell, HAlign, Mark, TextStyle, VAlign,
};

/// Produces the visual block for one record at a given width.
pub trait BlockRenderer {
    fn render(&self, record: &LabelRecord, width: f32) -> Result<Block, BlockError>;
}

impl<F> BlockRenderer for F
where
    F: Fn(&LabelRecord, f32) -> Result<Block, BlockError>,
{
    fn render(&self, record: &LabelRecord, width: f32) -> Result<Block, BlockError> {
        self(record, width)
    }
}

const SMALL: f32 = 8.0;
const BODY: f32 = 10.0;
const MARKER: f32 = 12.0;
const SEQUENCE: f32 = 15.0;
const BARCODE_HEIGHT: f32 = 30.0;

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, BlockError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(BlockError::MissingField(field)),
    }
}

fn optional(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn pin(value: Option<u32>) -> String {
    value.map(|p| format!("PIN: {}", p)).unwrap_or_else(|| "PIN: ".to_string())
}

fn small(text: impl Into<String>) -> BlockNode {
    BlockNode::text(text, TextStyle::regular(SMALL))
}

fn plain(child: BlockNode) -> BlockNode {
    Cell::new(child).borderless().padding(0.0).into()
}

/// The reference label: a three-column grid of bordered rows with markers,
/// trip details, a sequence badge, the AWB barcode, shipment summary,
/// addresses and a warehouse footer.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardLabel;

impl StandardLabel {
    pub fn new() -> Self {
        Self
    }

    /// The block tree for `record`, before measurement.
    pub fn describe(&self, record: &LabelRecord) -> Result<BlockNode, BlockError> {
        let vertical = required(record.vertical.as_deref(), "vertical")?;
        let trip_id = required(record.trip_id.as_deref(), "tripId")?;
        let carrier = required(record.carrier.as_deref(), "carrier")?;
        let awb = required(record.awb.as_deref(), "awb")?;
        let shipment_id = required(record.shipment_display_id.as_deref(), "shipmentDisplayId")?;
        let shipment_type = required(record.shipment_type.as_deref(), "shipmentType")?;
        let sequence = record.sequence.ok_or(BlockError::MissingField("sequence"))?;
        let barcode = encode_code128(awb)?;

        let markers = BlockNode::columns(vec![
            (
                2.0,
                Cell::new(BlockNode::text(vertical, TextStyle::italic(MARKER)))
                    .fixed_height(20.0)
                    .valign(VAlign::Middle)
                    .into(),
            ),
            (
                1.0,
                Cell::new(BlockNode::text(
                    record.priority_label(),
                    TextStyle::bold(MARKER).align(HAlign::Center),
                ))
                .fixed_height(20.0)
                .valign(VAlign::Middle)
                .into(),
            ),
        ]);

        let trip = Cell::new(BlockNode::rows(vec![
            BlockNode::columns(vec![(30.0, plain(small("Trip ID: "))), (70.0, plain(small(trip_id)))]),
            BlockNode::columns(vec![(30.0, plain(small("Carrier: "))), (70.0, plain(small(carrier)))]),
        ]))
        .fixed_height(40.0)
        .valign(VAlign::Middle);

        let badge = Cell::new(BlockNode::columns(vec![
            (1.0, plain(BlockNode::text("Seq:", TextStyle::regular(BODY).align(HAlign::Center)))),
            (
                1.0,
                Cell::new(BlockNode::text(
                    sequence.to_string(),
                    TextStyle::bold(SEQUENCE).align(HAlign::Center),
                ))
                .borderless()
                .padding(0.0)
                .valign(VAlign::Middle)
                .into(),
            ),
        ]))
        .padding(0.0)
        .fixed_height(40.0);

        let trip_row = BlockNode::columns(vec![
            (2.0, trip.into()),
            (1.0, BlockNode::from(badge).marked(Mark::SequenceBadge)),
        ]);

        let awb_row: BlockNode = Cell::new(BlockNode::rows(vec![
            BlockNode::columns(vec![
                (20.0, plain(BlockNode::text("AWB: ", TextStyle::regular(BODY)))),
                (80.0, plain(BlockNode::text(awb, TextStyle::regular(BODY)))),
            ]),
            BlockNode::barcode(barcode, BARCODE_HEIGHT).marked(Mark::Barcode),
        ]))
        .fixed_height(50.0)
        .into();

        let package_row: BlockNode = Cell::new(BlockNode::rows(vec![
            BlockNode::columns(vec![
                (70.0, plain(small(format!("Shipment ID: {}", shipment_id)))),
                (
                    30.0,
                    plain(BlockNode::text(shipment_type, TextStyle::bold(SMALL).align(HAlign::Right))),
                ),
            ]),
            BlockNode::text(optional(&record.item_name), TextStyle::regular(MARKER)),
        ]))
        .into();

        let user = optional(&record.user_details);
        let shipping_row: BlockNode = Cell::new(BlockNode::rows(vec![
            small("Shipping Address: "),
            small(user),
            BlockNode::columns(vec![
                (1.0, small(format!("Contact: {}", user))),
                (
                    1.0,
                    BlockNode::text(format!("PIN:{}", user), TextStyle::regular(SMALL).align(HAlign::Right)),
                ),
            ]),
        ]))
        .into();

        let seller = [record.seller_name.as_str(), record.seller_address.as_str()]
            .iter()
            .filter(|s| !s.trim().is_empty())
            .join(" ");
        let right_small = TextStyle::regular(SMALL).align(HAlign::Right);
        let vendor_row: BlockNode = Cell::new(BlockNode::rows(vec![
            small("Seller Name And Address: "),
            small(seller),
            small("Shipped By"),
            small(optional(&record.dispatch_fc_address)),
            BlockNode::text(pin(record.dispatch_pincode), right_small),
            small("Return Address"),
            small(optional(&record.return_address)),
            BlockNode::text(pin(record.return_pincode), right_small),
        ]))
        .into();

        let footer_row: BlockNode = Cell::new(small(format!(
            "For Warehouse use only: \nSKU: {}",
            optional(&record.package_name)
        )))
        .fixed_height(20.0)
        .padding(1.0)
        .valign(VAlign::Middle)
        .into();

        Ok(BlockNode::rows(vec![
            markers,
            trip_row,
            awb_row,
            package_row,
            shipping_row,
            vendor_row,
            footer_row,
        ]))
    }
}

impl BlockRenderer for StandardLabel {
    fn render(&self, record: &LabelRecord, width: f32) -> Result<Block, BlockError> {
        layout(&self.describe(record)?, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABEL_WIDTH: f32 = 595.28 / 2.0 - 30.0;

    fn render(record: &LabelRecord) -> Result<Block, BlockError> {
        StandardLabel::new().render(record, LABEL_WIDTH)
    }

    #[test]
    fn sample_renders_at_label_width() {
        let block = render(&LabelRecord::sample()).unwrap();
        assert_eq!(block.width(), LABEL_WIDTH);
        assert!(block.height() > 150.0 && block.height() < 420.0, "height {}", block.height());
        let texts: Vec<&str> = block.texts().collect();
        for expected in ["SALE", "PRIORITY", "TRIP-123456", "CARRIER", "1", "AWB123456", "DELIVERY", "PIN: 451001"] {
            assert!(texts.contains(&expected), "missing {expected:?} in {texts:?}");
        }
        assert!(texts.contains(&"Shipment ID: SHP-123456"));
        assert!(texts.contains(&"Dummy Seller Dummy Seller Address"));
    }

    #[test]
    fn standard_priority_marker() {
        let record = LabelRecord { priority: false, ..LabelRecord::sample() };
        let block = render(&record).unwrap();
        assert!(block.texts().any(|t| t == "STANDARD"));
        assert!(!block.texts().any(|t| t == "PRIORITY"));
    }

    #[test]
    fn badge_and_barcode_are_marked() {
        let block = render(&LabelRecord::sample()).unwrap();
        let badge = block.mark(Mark::SequenceBadge).unwrap();
        assert_eq!(badge.y, 20.0);
        assert_eq!(badge.height, 40.0);
        assert!((badge.x - LABEL_WIDTH * 2.0 / 3.0).abs() < 0.01);
        assert!(block.mark(Mark::Barcode).is_some());
    }

    #[test]
    fn missing_required_field_fails() {
        let record = LabelRecord { carrier: None, ..LabelRecord::sample() };
        assert_eq!(render(&record), Err(BlockError::MissingField("carrier")));

        let record = LabelRecord { awb: Some("   ".into()), ..LabelRecord::sample() };
        assert_eq!(render(&record), Err(BlockError::MissingField("awb")));

        let record = LabelRecord { sequence: None, ..LabelRecord::sample() };
        assert_eq!(render(&record), Err(BlockError::MissingField("sequence")));
    }

    #[test]
    fn unencodable_awb_fails() {
        let record = LabelRecord { awb: Some("AWB\u{7}1".into()), ..LabelRecord::sample() };
        assert!(matches!(render(&record), Err(BlockError::UnencodableBarcode { offset: 3, .. })));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let record = LabelRecord {
            item_name: None,
            user_details: None,
            return_address: None,
            dispatch_pincode: None,
            package_name: None,
            ..LabelRecord::sample()
        };
        let block = render(&record).unwrap();
        assert!(block.texts().any(|t| t == "PIN:"));
    }

    #[test]
    fn closures_are_renderers() {
        let failing = |_: &LabelRecord, _: f32| -> Result<Block, BlockError> { Err(BlockError::EmptyBarcode) };
        assert_eq!(failing.render(&LabelRecord::sample(), 10.0), Err(BlockError::EmptyBarcode));
    }
}
