/*!
 * Decoder for TIBCO substvar variable-definition documents
 *
 * A substvar document nests its variable records as
 * `repository > globalVariables > globalVariable`, each record carrying
 * `name` and `value` child elements. Everything outside that exact shape
 * (extra children such as `deploymentSettable` or `modTime`, attributes,
 * namespace declarations) is skipped rather than rejected.
 */

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Result;
use crate::types::GlobalVariable;

/// Element names of the record path, outermost first
const RECORD_PATH: [&str; 3] = ["repository", "globalVariables", "globalVariable"];

const NAME_ELEMENT: &str = "name";
const VALUE_ELEMENT: &str = "value";

/// Field of a variable record currently receiving character data
enum Field {
    Name,
    Value,
}

/// Decode every variable record in a substvar document
///
/// Returns one record per `globalVariable` element closed at the exact
/// record path, with missing `name`/`value` children left empty. Any XML
/// error aborts the decode; lenient callers treat that as zero records.
pub fn parse_variables(content: &str) -> Result<Vec<GlobalVariable>> {
    let mut reader = Reader::from_str(content);
    // Self-closing elements read as an open/close pair so `<value/>`
    // captures an empty string like `<value></value>` does.
    reader.config_mut().expand_empty_elements = true;

    let mut stack: Vec<String> = Vec::new();
    let mut current: Option<GlobalVariable> = None;
    let mut records = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().local_name().as_ref()).into_owned();
                stack.push(name);

                if let Some(field) = field_at(&stack) {
                    // A repeated field element within one record replaces
                    // the earlier text rather than appending to it.
                    if let Some(record) = current.as_mut() {
                        match field {
                            Field::Name => record.name.clear(),
                            Field::Value => record.value.clear(),
                        }
                    }
                } else if path_is(&stack, &RECORD_PATH) {
                    current = Some(GlobalVariable::default());
                }
            }
            Event::End(_) => {
                if path_is(&stack, &RECORD_PATH) {
                    if let Some(record) = current.take() {
                        records.push(record);
                    }
                }
                stack.pop();
            }
            Event::Text(e) => {
                if current.is_some() {
                    let text = e.unescape().map_err(quick_xml::Error::from)?;
                    append_field(&stack, current.as_mut(), &text);
                }
            }
            Event::CData(e) => {
                if current.is_some() {
                    let text = String::from_utf8_lossy(&e);
                    append_field(&stack, current.as_mut(), &text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(records)
}

/// Append character data to the record field open at the top of the stack
fn append_field(stack: &[String], current: Option<&mut GlobalVariable>, text: &str) {
    if let (Some(field), Some(record)) = (field_at(stack), current) {
        match field {
            Field::Name => record.name.push_str(text),
            Field::Value => record.value.push_str(text),
        }
    }
}

/// Check whether the open-element stack matches a path exactly
fn path_is(stack: &[String], want: &[&str]) -> bool {
    stack.len() == want.len() && stack.iter().zip(want).all(|(have, want)| have.as_str() == *want)
}

/// Identify which record field (if any) the stack currently points at
fn field_at(stack: &[String]) -> Option<Field> {
    let (leaf, parents) = stack.split_last()?;
    if !path_is(parents, &RECORD_PATH) {
        return None;
    }

    match leaf.as_str() {
        NAME_ELEMENT => Some(Field::Name),
        VALUE_ELEMENT => Some(Field::Value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, value: &str) -> GlobalVariable {
        GlobalVariable {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_parse_records() {
        let doc = r#"<?xml version="1.0" encoding="UTF-8"?>
<repository xmlns="http://www.tibco.com/xmlns/repo/types/2002">
  <globalVariables>
    <globalVariable>
      <name>Deployment</name>
      <value>orders</value>
      <deploymentSettable>true</deploymentSettable>
      <type>String</type>
      <modTime>1375475161843</modTime>
    </globalVariable>
    <globalVariable>
      <name>HTTPPort</name>
      <value>8080</value>
    </globalVariable>
  </globalVariables>
</repository>"#;

        let records = parse_variables(doc).unwrap();
        assert_eq!(
            records,
            vec![record("Deployment", "orders"), record("HTTPPort", "8080")]
        );
    }

    #[test]
    fn test_empty_collection() {
        let doc = "<repository><globalVariables></globalVariables></repository>";
        assert_eq!(parse_variables(doc).unwrap(), vec![]);
    }

    #[test]
    fn test_missing_children() {
        let doc = "<repository><globalVariables>\
                   <globalVariable><value>v</value></globalVariable>\
                   <globalVariable><name>n</name></globalVariable>\
                   <globalVariable/>\
                   </globalVariables></repository>";
        let records = parse_variables(doc).unwrap();
        assert_eq!(records, vec![record("", "v"), record("n", ""), record("", "")]);
    }

    #[test]
    fn test_self_closing_field() {
        let doc = "<repository><globalVariables>\
                   <globalVariable><name>n</name><value/></globalVariable>\
                   </globalVariables></repository>";
        assert_eq!(parse_variables(doc).unwrap(), vec![record("n", "")]);
    }

    #[test]
    fn test_entities_and_cdata() {
        let doc = "<repository><globalVariables>\
                   <globalVariable><name>url</name>\
                   <value>jdbc:db?a=1&amp;b=2</value></globalVariable>\
                   <globalVariable><name>raw</name>\
                   <value>pre<![CDATA[<b>&amp;</b>]]>post</value></globalVariable>\
                   </globalVariables></repository>";
        let records = parse_variables(doc).unwrap();
        assert_eq!(records[0].value, "jdbc:db?a=1&b=2");
        assert_eq!(records[1].value, "pre<b>&amp;</b>post");
    }

    #[test]
    fn test_repeated_field() {
        let doc = "<repository><globalVariables>\
                   <globalVariable><name>first</name><name>second</name>\
                   <value>v</value></globalVariable>\
                   </globalVariables></repository>";
        assert_eq!(parse_variables(doc).unwrap(), vec![record("second", "v")]);
    }

    #[test]
    fn test_records_outside_path() {
        // Wrong root element
        let wrong_root = "<foo><globalVariables>\
                          <globalVariable><name>n</name><value>v</value></globalVariable>\
                          </globalVariables></foo>";
        assert_eq!(parse_variables(wrong_root).unwrap(), vec![]);

        // Record nested one level too deep
        let too_deep = "<repository><globalVariables><wrapper>\
                        <globalVariable><name>n</name><value>v</value></globalVariable>\
                        </wrapper></globalVariables></repository>";
        assert_eq!(parse_variables(too_deep).unwrap(), vec![]);

        // Field elements nested inside an unrelated child of the record
        let buried_fields = "<repository><globalVariables><globalVariable>\
                             <extra><name>n</name><value>v</value></extra>\
                             </globalVariable></globalVariables></repository>";
        assert_eq!(parse_variables(buried_fields).unwrap(), vec![record("", "")]);
    }

    #[test]
    fn test_malformed_documents() {
        assert!(parse_variables("<repository><globalVariables></broken></repository>").is_err());
        assert!(parse_variables("not xml at all <<<").is_err());
    }

    #[test]
    fn test_plain_text_input() {
        assert_eq!(parse_variables("just some text").unwrap(), vec![]);
        assert_eq!(parse_variables("").unwrap(), vec![]);
    }
}
