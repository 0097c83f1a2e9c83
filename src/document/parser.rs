//! XML adapter converting a `roxmltree` document into an owned [`Element`] tree.

use roxmltree::{Node, ParsingOptions};

use super::Element;
use crate::error::Result;

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Parse XML text and return the root element.
///
/// DTDs are accepted since OSIS files produced by older tools still carry a
/// doctype declaration.
pub fn parse(xml: &str) -> Result<Element> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = roxmltree::Document::parse_with_options(xml, options)?;
    Ok(convert(document.root_element()))
}

fn convert(node: Node<'_, '_>) -> Element {
    let mut element = Element::new(node.tag_name().name());

    for attribute in node.attributes() {
        let name = match attribute.namespace() {
            Some(XML_NAMESPACE) => format!("xml:{}", attribute.name()),
            _ => attribute.name().to_string(),
        };
        element = element.with_attribute(name, attribute.value());
    }

    for child in node.children() {
        if child.is_element() {
            element.push_child(convert(child));
        } else if child.is_text() {
            if let Some(text) = child.text() {
                element.push_text(text);
            }
        }
    }

    element
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_namespaced_osis() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<osis xmlns="http://www.bibletechnologies.net/2003/OSIS/namespace">
  <osisText osisIDWork="Test" xml:lang="he" osisRefWork="Bible">
    <div type="book"><w lemma="strong:H7225" morph="HNcfsa">בְּרֵאשִׁית</w></div>
  </osisText>
</osis>"#;

        let root = parse(xml).unwrap();
        assert_eq!(root.name(), "osis");

        let osis_text = &root.children()[0];
        assert_eq!(osis_text.name(), "osisText");
        assert_eq!(osis_text.attribute("xml:lang"), Some("he"));
        assert_eq!(osis_text.attribute("lang"), None);

        let word = root.descendants().find(|e| e.name() == "w").unwrap();
        assert_eq!(word.attribute("lemma"), Some("strong:H7225"));
        assert_eq!(word.text(), "בְּרֵאשִׁית");
    }

    #[test]
    fn test_parse_accepts_doctype() {
        let xml = r#"<?xml version="1.0"?>
<!DOCTYPE osis SYSTEM "osis.dtd">
<osis><osisText osisIDWork="X"/></osis>"#;
        assert!(parse(xml).is_ok());
    }

    #[test]
    fn test_parse_rejects_malformed_xml() {
        assert!(parse("<osis><osisText></osis>").is_err());
    }
}
