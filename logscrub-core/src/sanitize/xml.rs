//! XML sanitization without a full parse: sensitive field names are matched
//! as element content and as attribute values, then the whole document is
//! pattern-scanned.

use crate::sanitize::Sanitizer;

impl Sanitizer {
    pub(crate) fn sanitize_xml(&self, body: &str) -> String {
        let mut result = body.to_string();

        // <password>value</password> -> <password>MASK</password>
        for re in &self.xml_tag_patterns {
            result = re
                .replace_all(&result, |caps: &regex::Captures| {
                    format!("{}{}{}", &caps[1], self.config.mask, &caps[3])
                })
                .into_owned();
        }

        // <tag password="value"> -> <tag password="MASK">
        for re in &self.xml_attr_patterns {
            result = re
                .replace_all(&result, |caps: &regex::Captures| {
                    format!("{}{}{}", &caps[1], self.config.mask, &caps[3])
                })
                .into_owned();
        }

        self.sanitize_text(&result)
    }
}
