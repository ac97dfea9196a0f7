use serde::Serialize;

/// Values substituted into notification templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub platform_name: String,
    pub site_name: String,
    pub contact_email: String,
    pub lms_root_url: String,
    pub full_name: String,
}

impl TemplateContext {
    /// Site-wide values with an empty `full_name`
    pub fn base(
        platform_name: impl Into<String>,
        site_name: impl Into<String>,
        contact_email: impl Into<String>,
        lms_root_url: impl Into<String>,
    ) -> Self {
        Self {
            platform_name: platform_name.into(),
            site_name: site_name.into(),
            contact_email: contact_email.into(),
            lms_root_url: lms_root_url.into(),
            full_name: String::new(),
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Substitute `{placeholder}`s in one pass over `template`.
    ///
    /// Substituted values are never rescanned. Unknown placeholders are kept
    /// as written.
    pub(crate) fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                out.push_str(&rest[open..]);
                return out;
            };

            let key = &after[..close];
            match self.value(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(key);
                    out.push('}');
                }
            }
            rest = &after[close + 1..];
        }

        out.push_str(rest);
        out
    }

    fn value(&self, key: &str) -> Option<&str> {
        match key {
            "platform_name" => Some(&self.platform_name),
            "site_name" => Some(&self.site_name),
            "contact_email" => Some(&self.contact_email),
            "lms_root_url" => Some(&self.lms_root_url),
            "full_name" => Some(&self.full_name),
            _ => None,
        }
    }
}
