//! Module for the record variant of the benchmark: generated payloads become items, travel
//! through an in-memory XML document and are mapped back into typed entities.
//!
//! The document layout is
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8" standalone="yes"?>
//! <!--Sample Data from Somewhere-->
//! <SampleData>
//!   <Item>
//!     <property name="ItemId" value="0"/>
//!     <property name="ItemDescription" value="ItemId: 0 Desc"/>
//!     <property name="ItemCode" value="P123-456-0"/>
//!     <property name="ItemCost" value="X534011718"/>
//!   </Item>
//! </SampleData>
//! ```

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::{
    Error,
    convert::Convert,
    domain::{GeneratedRecord, ItemEntity, Property, PropertyBag},
    error::malformed_number,
};


pub const ITEM_ID: &str = "ItemId";
pub const ITEM_DESCRIPTION: &str = "ItemDescription";
pub const ITEM_CODE: &str = "ItemCode";
pub const ITEM_COST: &str = "ItemCost";

const ROOT_ELEMENT: &str = "SampleData";
const ITEM_ELEMENT: &str = "Item";
const PROPERTY_ELEMENT: &str = "property";
const DOCUMENT_COMMENT: &str = "Sample Data from Somewhere";

/// Builds the item for a generated record. Only `ItemCost` carries the (possibly malformed)
/// payload; the other fields are derived from the index.
pub fn to_record(record: &GeneratedRecord) -> PropertyBag {
    let i = record.index();
    PropertyBag::new(vec![
        Property::new(ITEM_ID, i.to_string()),
        Property::new(ITEM_DESCRIPTION, format!("ItemId: {i} Desc")),
        Property::new(ITEM_CODE, format!("P123-456-{i}")),
        Property::new(ITEM_COST, record.payload()),
    ])
}

/// Serializes items into an XML document.
pub fn write_document(bags: &[PropertyBag]) -> Result<String, Error> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), Some("yes"))))?;
    writer.write_event(Event::Comment(BytesText::new(DOCUMENT_COMMENT)))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT_ELEMENT)))?;

    for bag in bags {
        writer.write_event(Event::Start(BytesStart::new(ITEM_ELEMENT)))?;
        for property in bag.properties() {
            let element = BytesStart::new(PROPERTY_ELEMENT).with_attributes([
                ("name", property.name.as_str()),
                ("value", property.value.as_str()),
            ]);
            writer.write_event(Event::Empty(element))?;
        }
        writer.write_event(Event::End(BytesEnd::new(ITEM_ELEMENT)))?;
    }

    writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Reads the items back out of an XML document, one [`PropertyBag`] per `Item` element.
///
/// Elements other than `Item` and `property` are ignored. An `Item` inside another `Item` and a
/// `property` outside of any `Item` are rejected with [`Error::MisplacedElement`].
pub fn read_document(xml: &str) -> Result<Vec<PropertyBag>, Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut bags = Vec::new();
    let mut current: Option<PropertyBag> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e)
                if e.name().as_ref() == ITEM_ELEMENT.as_bytes() && current.is_some() =>
            {
                return Err(Error::MisplacedElement {
                    element: ITEM_ELEMENT,
                    context: "inside another <Item>",
                });
            }
            Event::Start(e) if e.name().as_ref() == ITEM_ELEMENT.as_bytes() => {
                current = Some(PropertyBag::default());
            }
            Event::Empty(e) if e.name().as_ref() == ITEM_ELEMENT.as_bytes() => {
                bags.push(PropertyBag::default());
            }
            Event::End(e) if e.name().as_ref() == ITEM_ELEMENT.as_bytes() => {
                if let Some(bag) = current.take() {
                    bags.push(bag);
                }
            }
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == PROPERTY_ELEMENT.as_bytes() => {
                let Some(bag) = current.as_mut() else {
                    return Err(Error::MisplacedElement {
                        element: PROPERTY_ELEMENT,
                        context: "outside of an <Item>",
                    });
                };
                bag.push(read_property(&e)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(bags)
}

fn read_property(element: &BytesStart<'_>) -> Result<Property, Error> {
    let mut name = None;
    let mut value = None;

    for attr in element.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"name" => name = Some(attr.unescape_value()?.into_owned()),
            b"value" => value = Some(attr.unescape_value()?.into_owned()),
            _ => {}
        }
    }

    let name = name.ok_or(Error::MissingAttribute {
        element: PROPERTY_ELEMENT,
        attribute: "name",
    })?;
    let value = value.ok_or(Error::MissingAttribute {
        element: PROPERTY_ELEMENT,
        attribute: "value",
    })?;
    Ok(Property { name, value })
}

/// Turns generated records into items and round-trips them through an XML document.
pub fn materialize(records: &[GeneratedRecord]) -> Result<Vec<PropertyBag>, Error> {
    let bags: Vec<PropertyBag> = records.iter().map(to_record).collect();
    let xml = write_document(&bags)?;
    read_document(&xml)
}

/// Maps an item to its typed entity, converting the cost with `converter`.
///
/// A missing field stays `None`; a present but malformed cost becomes the converter's fallback.
pub fn from_record(bag: &PropertyBag, converter: &impl Convert) -> ItemEntity {
    ItemEntity {
        item_id: bag.get(ITEM_ID).map(str::to_owned),
        item_description: bag.get(ITEM_DESCRIPTION).map(str::to_owned),
        item_code: bag.get(ITEM_CODE).map(str::to_owned),
        item_cost: bag.get(ITEM_COST).map(|cost| converter.convert(cost)),
    }
}

/// Maps an item to its typed entity without any fallback: every field must be present and the
/// cost must be a base-10 integer.
pub fn try_from_record(bag: &PropertyBag) -> Result<ItemEntity, Error> {
    let field = |name: &'static str| {
        bag.get(name)
            .map(str::to_owned)
            .ok_or(Error::MissingField(name))
    };

    let raw_cost = bag.get(ITEM_COST).ok_or(Error::MissingField(ITEM_COST))?;
    let cost = raw_cost
        .parse::<i32>()
        .map_err(|e| malformed_number(ITEM_COST, raw_cost, e))?;

    Ok(ItemEntity {
        item_id: Some(field(ITEM_ID)?),
        item_description: Some(field(ITEM_DESCRIPTION)?),
        item_code: Some(field(ITEM_CODE)?),
        item_cost: Some(cost),
    })
}
