use web_sys::File;

use crate::content::pathways::{
    find_pathway, InquiryPathway, CHANNEL_OPTIONS, GENERAL_PATHWAY, TIMELINE_OPTIONS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    Email,
    Phone,
    Location,
    Organization,
    RequestType,
    Timeline,
    ContactChannel,
    Message,
    Attachment,
}

impl FieldKey {
    /// Form field name on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Email => "email",
            FieldKey::Phone => "phone",
            FieldKey::Location => "location",
            FieldKey::Organization => "organization",
            FieldKey::RequestType => "request_type",
            FieldKey::Timeline => "timeline",
            FieldKey::ContactChannel => "contact_channel",
            FieldKey::Message => "message",
            FieldKey::Attachment => "attachment",
        }
    }

    /// Companion key carrying the free text behind an "Other" choice.
    pub fn other_wire_name(&self) -> String {
        format!("{}_other", self.wire_name())
    }
}

/// The closed set of inputs the inquiry form is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    SelectWithOther(&'static [&'static str]),
    File,
    TextArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Always,
    Optional,
    /// Required unless the inquiry is filed under the general pathway.
    UnlessGeneral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub requirement: Requirement,
}

/// Field layout for a pathway. Without one, request types come from the
/// general pathway.
pub fn form_fields(pathway: Option<&InquiryPathway>) -> [FieldSpec; 10] {
    let request_options = pathway
        .or_else(|| find_pathway(GENERAL_PATHWAY))
        .map(|p| p.options)
        .unwrap_or(&[]);
    [
        FieldSpec { key: FieldKey::Name, label: "Full Name", placeholder: "Jane Doe", kind: FieldKind::Text, requirement: Requirement::Always },
        FieldSpec { key: FieldKey::Email, label: "Email Address", placeholder: "hello@company.com", kind: FieldKind::Email, requirement: Requirement::Always },
        FieldSpec { key: FieldKey::Phone, label: "Phone", placeholder: "+1 (555) 000-0000", kind: FieldKind::Tel, requirement: Requirement::Optional },
        FieldSpec { key: FieldKey::Location, label: "City / Region", placeholder: "Denver, CO", kind: FieldKind::Text, requirement: Requirement::Always },
        FieldSpec { key: FieldKey::Organization, label: "Organization", placeholder: "Company or publication", kind: FieldKind::Text, requirement: Requirement::UnlessGeneral },
        FieldSpec { key: FieldKey::RequestType, label: "Request Type", placeholder: "Select a request", kind: FieldKind::SelectWithOther(request_options), requirement: Requirement::Always },
        FieldSpec { key: FieldKey::Timeline, label: "Timeline", placeholder: "Select a timeline", kind: FieldKind::SelectWithOther(TIMELINE_OPTIONS), requirement: Requirement::Always },
        FieldSpec { key: FieldKey::ContactChannel, label: "Preferred Channel", placeholder: "Select a channel", kind: FieldKind::SelectWithOther(CHANNEL_OPTIONS), requirement: Requirement::Always },
        FieldSpec { key: FieldKey::Message, label: "Message", placeholder: "Your inquiry...", kind: FieldKind::TextArea, requirement: Requirement::Always },
        FieldSpec { key: FieldKey::Attachment, label: "Attachment", placeholder: "", kind: FieldKind::File, requirement: Requirement::Optional },
    ]
}

/// Value of a select-with-other field. `Other` carries its own free text so
/// the sentinel never has to be compared as a string past the DOM boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice {
    #[default]
    Unset,
    Listed(String),
    Other(String),
}

impl Choice {
    pub const OTHER: &'static str = "Other";

    /// Interpret a raw `<select>` value. Re-selecting "Other" keeps any text
    /// already typed.
    pub fn from_select(raw: &str, previous: &Choice) -> Choice {
        match raw {
            "" => Choice::Unset,
            Self::OTHER => match previous {
                Choice::Other(text) => Choice::Other(text.clone()),
                _ => Choice::Other(String::new()),
            },
            listed => Choice::Listed(listed.to_string()),
        }
    }

    pub fn select_value(&self) -> &str {
        match self {
            Choice::Unset => "",
            Choice::Listed(value) => value,
            Choice::Other(_) => Self::OTHER,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Choice::Other(_))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InquiryFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub organization: String,
    pub request_type: Choice,
    pub timeline: Choice,
    pub contact_channel: Choice,
    pub message: String,
    pub attachment: Option<File>,
}

impl InquiryFields {
    pub fn text(&self, key: FieldKey) -> Option<&str> {
        match key {
            FieldKey::Name => Some(&self.name),
            FieldKey::Email => Some(&self.email),
            FieldKey::Phone => Some(&self.phone),
            FieldKey::Location => Some(&self.location),
            FieldKey::Organization => Some(&self.organization),
            FieldKey::Message => Some(&self.message),
            _ => None,
        }
    }

    pub fn text_mut(&mut self, key: FieldKey) -> Option<&mut String> {
        match key {
            FieldKey::Name => Some(&mut self.name),
            FieldKey::Email => Some(&mut self.email),
            FieldKey::Phone => Some(&mut self.phone),
            FieldKey::Location => Some(&mut self.location),
            FieldKey::Organization => Some(&mut self.organization),
            FieldKey::Message => Some(&mut self.message),
            _ => None,
        }
    }

    pub fn choice(&self, key: FieldKey) -> Option<&Choice> {
        match key {
            FieldKey::RequestType => Some(&self.request_type),
            FieldKey::Timeline => Some(&self.timeline),
            FieldKey::ContactChannel => Some(&self.contact_channel),
            _ => None,
        }
    }

    pub fn choice_mut(&mut self, key: FieldKey) -> Option<&mut Choice> {
        match key {
            FieldKey::RequestType => Some(&mut self.request_type),
            FieldKey::Timeline => Some(&mut self.timeline),
            FieldKey::ContactChannel => Some(&mut self.contact_channel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    Missing,
    MissingOther,
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIssue {
    pub key: FieldKey,
    pub problem: Problem,
}

impl FieldIssue {
    pub fn message(&self) -> &'static str {
        match self.problem {
            Problem::Missing => "This field is required.",
            Problem::MissingOther => "Please describe your choice.",
            Problem::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_sentinel_maps_to_tagged_variant() {
        assert_eq!(Choice::from_select("Other", &Choice::Unset), Choice::Other(String::new()));
        assert_eq!(Choice::from_select("Email", &Choice::Unset), Choice::Listed("Email".into()));
        assert_eq!(Choice::from_select("", &Choice::Listed("Email".into())), Choice::Unset);
    }

    #[test]
    fn reselecting_other_keeps_text() {
        let prev = Choice::Other("Carrier pigeon".into());
        assert_eq!(Choice::from_select("Other", &prev), prev);
        assert_eq!(prev.select_value(), "Other");
    }

    #[test]
    fn request_options_follow_pathway() {
        let press = find_pathway("press");
        let fields = form_fields(press);
        let request = fields.iter().find(|f| f.key == FieldKey::RequestType).map(|f| f.kind);
        assert_eq!(request, Some(FieldKind::SelectWithOther(press.map(|p| p.options).unwrap_or(&[]))));
    }

    #[test]
    fn no_pathway_offers_general_request_types() {
        let general = find_pathway(GENERAL_PATHWAY).map(|p| p.options);
        let request = form_fields(None)
            .iter()
            .find(|f| f.key == FieldKey::RequestType)
            .map(|f| f.kind);
        assert!(general.is_some_and(|o| !o.is_empty()));
        assert_eq!(request, general.map(FieldKind::SelectWithOther));
    }

    #[test]
    fn every_key_appears_once() {
        let fields = form_fields(None);
        for (i, a) in fields.iter().enumerate() {
            assert!(fields.iter().skip(i + 1).all(|b| b.key != a.key));
        }
    }

    #[test]
    fn other_wire_name_is_suffixed() {
        assert_eq!(FieldKey::ContactChannel.other_wire_name(), "contact_channel_other");
    }
}
