/// Brand contact record. Everything here is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub website: &'static str,
    pub website_label: &'static str,
    pub tagline: &'static str,
    pub vcf: &'static str,
}

pub const JANE_WEST: ContactInfo = ContactInfo {
    name: "Jane West",
    title: "CEO & Founder",
    email: "jane@janewest.com",
    website: "https://janewest.com",
    website_label: "janewest.com",
    tagline: "ARCHITECTING THE FUTURE SINCE 2014",
    vcf: "BEGIN:VCARD\n\
VERSION:3.0\n\
FN:Jane West\n\
ORG:Jane West / Women Grow\n\
TITLE:CEO & Founder\n\
EMAIL:jane@janewest.com\n\
URL:https://janewest.com\n\
NOTE:Life is better with Jane. Architecting the future since 2014.\n\
END:VCARD",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vcf_template_is_a_complete_vcard_3() {
        let lines: Vec<&str> = JANE_WEST.vcf.lines().collect();
        assert_eq!(lines.first(), Some(&"BEGIN:VCARD"));
        assert_eq!(lines.last(), Some(&"END:VCARD"));
        assert!(lines.contains(&"VERSION:3.0"));
        for field in ["FN:", "ORG:", "TITLE:", "EMAIL:", "URL:", "NOTE:"] {
            assert!(
                lines.iter().any(|l| l.starts_with(field)),
                "missing {field}"
            );
        }
    }

    #[test]
    fn vcf_agrees_with_contact_fields() {
        assert!(JANE_WEST.vcf.contains(&format!("FN:{}", JANE_WEST.name)));
        assert!(JANE_WEST.vcf.contains(&format!("EMAIL:{}", JANE_WEST.email)));
        assert!(JANE_WEST.vcf.contains(&format!("URL:{}", JANE_WEST.website)));
    }
}
