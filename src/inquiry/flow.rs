use web_sys::File;

use crate::content::pathways::{find_pathway, InquiryPathway, GENERAL_PATHWAY};
use crate::inquiry::endpoint::SubmitError;
use crate::inquiry::model::{
    form_fields, Choice, FieldIssue, FieldKey, FieldSpec, InquiryFields, Problem, Requirement,
};

pub const CATEGORY_FIELD: &str = "Inquiry Category";
pub const GENERAL_CATEGORY: &str = "GENERAL";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error(String),
}

/// Why a submission did not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginError {
    InFlight,
    AlreadySent,
    Invalid(Vec<FieldIssue>),
}

/// Identifies one `begin_submit` call so a late reply from an abandoned
/// request cannot settle a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptId(u64);

/// A started submission: the payload to deliver and the attempt it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub attempt: AttemptId,
    pub payload: InquiryPayload,
}

/// What goes over the wire: ordered form fields plus an optional file part.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InquiryPayload {
    pub fields: Vec<(String, String)>,
    pub attachment: Option<File>,
}

impl InquiryPayload {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn push(&mut self, key: impl Into<String>, value: &str) {
        self.fields.push((key.into(), value.trim().to_string()));
    }
}

/// One contact-dialog session: field values, chosen pathway and where the
/// submission currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InquiryFlow {
    pathway: Option<&'static InquiryPathway>,
    fields: InquiryFields,
    status: SubmissionStatus,
    issues: Vec<FieldIssue>,
    attempts: u64,
    pending: Option<AttemptId>,
}

/// No pathway, or an unknown one, files under general.
fn resolve_pathway(id: Option<&str>) -> Option<&'static InquiryPathway> {
    id.and_then(find_pathway)
        .or_else(|| find_pathway(GENERAL_PATHWAY))
}

impl InquiryFlow {
    pub fn new(pathway: Option<&str>) -> Self {
        Self {
            pathway: resolve_pathway(pathway),
            ..Self::default()
        }
    }

    pub fn pathway(&self) -> Option<&'static InquiryPathway> {
        self.pathway
    }

    pub fn fields(&self) -> &InquiryFields {
        &self.fields
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn issue_for(&self, key: FieldKey) -> Option<&FieldIssue> {
        self.issues.iter().find(|i| i.key == key)
    }

    pub fn field_specs(&self) -> [FieldSpec; 10] {
        form_fields(self.pathway)
    }

    /// Value of the `Inquiry Category` field.
    pub fn category(&self) -> String {
        self.pathway
            .map(|p| p.category())
            .unwrap_or_else(|| GENERAL_CATEGORY.to_string())
    }

    fn is_general(&self) -> bool {
        self.pathway.map_or(true, |p| p.is_general())
    }

    pub fn is_required(&self, key: FieldKey) -> bool {
        self.field_specs()
            .iter()
            .find(|spec| spec.key == key)
            .map_or(false, |spec| match spec.requirement {
                Requirement::Always => true,
                Requirement::Optional => false,
                Requirement::UnlessGeneral => !self.is_general(),
            })
    }

    /// Unknown ids fall back to general. A different pathway brings a
    /// different request type list, so the old choice is dropped.
    pub fn select_pathway(&mut self, id: Option<&str>) {
        let next = resolve_pathway(id);
        if next != self.pathway {
            self.pathway = next;
            self.fields.request_type = Choice::Unset;
            self.forget_issue(FieldKey::RequestType);
            self.forget_issue(FieldKey::Organization);
        }
    }

    pub fn set_text(&mut self, key: FieldKey, value: String) {
        if let Some(slot) = self.fields.text_mut(key) {
            *slot = value;
            self.forget_issue(key);
        }
    }

    pub fn select(&mut self, key: FieldKey, raw: &str) {
        if let Some(slot) = self.fields.choice_mut(key) {
            let next = Choice::from_select(raw, slot);
            *slot = next;
            self.forget_issue(key);
        }
    }

    pub fn set_other_text(&mut self, key: FieldKey, value: String) {
        if let Some(Choice::Other(text)) = self.fields.choice_mut(key) {
            *text = value;
            self.forget_issue(key);
        }
    }

    pub fn set_attachment(&mut self, file: Option<File>) {
        self.fields.attachment = file;
    }

    fn forget_issue(&mut self, key: FieldKey) {
        self.issues.retain(|i| i.key != key);
    }

    /// Submit control is live only outside of sending and success.
    pub fn can_submit(&self) -> bool {
        matches!(self.status, SubmissionStatus::Idle | SubmissionStatus::Error(_))
    }

    pub fn validate(&self) -> Result<(), Vec<FieldIssue>> {
        let mut issues = Vec::new();
        for spec in self.field_specs() {
            let key = spec.key;
            let required = self.is_required(key);
            if let Some(text) = self.fields.text(key) {
                let text = text.trim();
                if text.is_empty() {
                    if required {
                        issues.push(FieldIssue { key, problem: Problem::Missing });
                    }
                } else if key == FieldKey::Email && !looks_like_email(text) {
                    issues.push(FieldIssue { key, problem: Problem::InvalidEmail });
                }
            } else if let Some(choice) = self.fields.choice(key) {
                match choice {
                    Choice::Unset if required => {
                        issues.push(FieldIssue { key, problem: Problem::Missing })
                    }
                    Choice::Other(text) if text.trim().is_empty() => {
                        issues.push(FieldIssue { key, problem: Problem::MissingOther })
                    }
                    _ => {}
                }
            }
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }

    fn payload(&self) -> InquiryPayload {
        let mut payload = InquiryPayload::default();
        for spec in self.field_specs() {
            let key = spec.key;
            if let Some(text) = self.fields.text(key) {
                if !text.trim().is_empty() || self.is_required(key) {
                    payload.push(key.wire_name(), text);
                }
            } else if let Some(choice) = self.fields.choice(key) {
                match choice {
                    Choice::Unset => {}
                    Choice::Listed(value) => payload.push(key.wire_name(), value),
                    Choice::Other(text) => {
                        payload.push(key.wire_name(), Choice::OTHER);
                        payload.push(key.other_wire_name(), text);
                    }
                }
            }
        }
        payload.push(CATEGORY_FIELD, &self.category());
        payload.attachment = self.fields.attachment.clone();
        payload
    }

    /// Validate and move to `Sending`. Nothing changes state unless the
    /// payload is returned.
    pub fn begin_submit(&mut self) -> Result<Submission, BeginError> {
        match self.status {
            SubmissionStatus::Sending => return Err(BeginError::InFlight),
            SubmissionStatus::Success => return Err(BeginError::AlreadySent),
            SubmissionStatus::Idle | SubmissionStatus::Error(_) => {}
        }
        if let Err(issues) = self.validate() {
            self.issues = issues.clone();
            return Err(BeginError::Invalid(issues));
        }
        self.issues.clear();
        self.status = SubmissionStatus::Sending;
        self.attempts += 1;
        let attempt = AttemptId(self.attempts);
        self.pending = Some(attempt);
        Ok(Submission {
            attempt,
            payload: self.payload(),
        })
    }

    /// Outcome of the request started by [`begin_submit`](Self::begin_submit).
    /// Ignored unless `attempt` is the request still in flight.
    pub fn settle(&mut self, attempt: AttemptId, result: Result<(), SubmitError>) {
        if self.pending != Some(attempt) || self.status != SubmissionStatus::Sending {
            return;
        }
        self.pending = None;
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.fields = InquiryFields::default();
            }
            Err(e) => self.status = SubmissionStatus::Error(e.to_string()),
        }
    }

    /// Dialog closed: back to idle with no error, whatever happened before.
    pub fn close(&mut self) {
        self.status = SubmissionStatus::Idle;
        self.pending = None;
        self.issues.clear();
    }
}

fn looks_like_email(text: &str) -> bool {
    match text.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::endpoint::{interpret_reply, InquiryEndpoint};
    use crate::inquiry::model::FieldKind;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// Stands in for the form backend.
    enum Reply {
        Status(u16, &'static str),
        Offline,
    }

    struct MockEndpoint {
        reply: Reply,
        calls: Cell<u32>,
        last: RefCell<Option<InquiryPayload>>,
    }

    impl MockEndpoint {
        fn new(reply: Reply) -> Self {
            Self { reply, calls: Cell::new(0), last: RefCell::new(None) }
        }
    }

    impl InquiryEndpoint for MockEndpoint {
        async fn deliver(&self, payload: InquiryPayload) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(payload);
            match self.reply {
                Reply::Status(code, body) => interpret_reply((200..300).contains(&code), body),
                Reply::Offline => Err(SubmitError::Network),
            }
        }
    }

    fn filled(pathway: &str) -> InquiryFlow {
        let mut flow = InquiryFlow::new(Some(pathway));
        flow.set_text(FieldKey::Name, "Ada Lovelace".into());
        flow.set_text(FieldKey::Email, "ada@example.com".into());
        flow.set_text(FieldKey::Location, "London".into());
        flow.set_text(FieldKey::Organization, "Analytical Engines".into());
        let first = flow.pathway().map(|p| p.options[0]).unwrap_or_default();
        flow.select(FieldKey::RequestType, first);
        flow.select(FieldKey::Timeline, "Within 1 month");
        flow.select(FieldKey::ContactChannel, "Email");
        flow.set_text(FieldKey::Message, "Hello there".into());
        flow
    }

    /// Run one submit through the endpoint, if validation lets it start.
    fn submit(flow: &mut InquiryFlow, endpoint: &MockEndpoint) -> Result<(), BeginError> {
        let submission = flow.begin_submit()?;
        assert_eq!(flow.status(), &SubmissionStatus::Sending);
        assert!(!flow.can_submit());
        let result = block_on(endpoint.deliver(submission.payload));
        flow.settle(submission.attempt, result);
        Ok(())
    }

    #[test]
    fn accepted_submission_succeeds_and_clears_fields() {
        let endpoint = MockEndpoint::new(Reply::Status(200, "{\"ok\":true}"));
        let mut flow = filled("wholesale");
        assert_eq!(flow.status(), &SubmissionStatus::Idle);

        submit(&mut flow, &endpoint).expect("submission should start");

        assert_eq!(flow.status(), &SubmissionStatus::Success);
        assert_eq!(flow.fields(), &InquiryFields::default());
        assert_eq!(endpoint.calls.get(), 1);
    }

    #[test]
    fn payload_carries_category_and_required_fields() {
        let endpoint = MockEndpoint::new(Reply::Status(200, ""));
        let mut flow = filled("collaboration");
        submit(&mut flow, &endpoint).expect("submission should start");

        let sent = endpoint.last.borrow().clone().expect("payload recorded");
        assert_eq!(sent.get(CATEGORY_FIELD), Some("COLLABORATION"));
        assert_eq!(sent.get("name"), Some("Ada Lovelace"));
        assert_eq!(sent.get("organization"), Some("Analytical Engines"));
        assert_eq!(sent.get("request_type"), Some("Product Collaboration"));
        assert_eq!(sent.get("timeline"), Some("Within 1 month"));
        assert_eq!(sent.get("contact_channel"), Some("Email"));
        assert_eq!(sent.get("phone"), None);
        assert_eq!(sent.attachment, None);
    }

    #[test]
    fn no_pathway_files_as_general() {
        let mut flow = filled("general");
        flow.select_pathway(None);
        assert_eq!(flow.category(), GENERAL_CATEGORY);
        assert!(!flow.is_required(FieldKey::Organization));
    }

    #[test]
    fn structured_rejection_is_shown_verbatim() {
        let endpoint = MockEndpoint::new(Reply::Status(422, r#"{"errors":[{"message":"Email invalid"}]}"#));
        let mut flow = filled("press");
        submit(&mut flow, &endpoint).expect("submission should start");
        assert_eq!(flow.status(), &SubmissionStatus::Error("Email invalid".into()));
        assert_eq!(flow.fields().name, "Ada Lovelace");
    }

    #[test]
    fn structured_rejection_joins_messages() {
        let endpoint = MockEndpoint::new(Reply::Status(
            422,
            r#"{"errors":[{"message":"Email invalid"},{"message":"Message too short"}]}"#,
        ));
        let mut flow = filled("press");
        submit(&mut flow, &endpoint).expect("submission should start");
        assert_eq!(
            flow.status(),
            &SubmissionStatus::Error("Email invalid, Message too short".into())
        );
    }

    #[test]
    fn unstructured_rejection_is_generic() {
        let endpoint = MockEndpoint::new(Reply::Status(500, "<html>oops</html>"));
        let mut flow = filled("press");
        submit(&mut flow, &endpoint).expect("submission should start");
        assert_eq!(
            flow.status(),
            &SubmissionStatus::Error("Submission failed. Please try again.".into())
        );
    }

    #[test]
    fn network_failure_has_its_own_message() {
        let endpoint = MockEndpoint::new(Reply::Offline);
        let mut flow = filled("press");
        submit(&mut flow, &endpoint).expect("submission should start");
        assert_eq!(
            flow.status(),
            &SubmissionStatus::Error("Network error. Please check your connection.".into())
        );
    }

    #[test]
    fn error_state_can_resubmit() {
        let mut flow = filled("press");
        submit(&mut flow, &MockEndpoint::new(Reply::Offline)).expect("first attempt");
        assert!(flow.can_submit());
        let endpoint = MockEndpoint::new(Reply::Status(200, ""));
        submit(&mut flow, &endpoint).expect("second attempt");
        assert_eq!(flow.status(), &SubmissionStatus::Success);
    }

    #[test]
    fn second_submit_while_sending_is_refused() {
        let mut flow = filled("press");
        flow.begin_submit().expect("first submit");
        assert_eq!(flow.begin_submit(), Err(BeginError::InFlight));
    }

    #[test]
    fn success_requires_close_before_another_submit() {
        let mut flow = filled("press");
        submit(&mut flow, &MockEndpoint::new(Reply::Status(200, ""))).expect("submit");
        assert_eq!(flow.begin_submit(), Err(BeginError::AlreadySent));
        flow.close();
        assert_eq!(flow.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn settle_without_request_is_ignored() {
        let mut flow = filled("press");
        let stale = flow.begin_submit().expect("submit").attempt;
        flow.close();
        flow.settle(stale, Err(SubmitError::Network));
        assert_eq!(flow.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn late_reply_from_closed_dialog_does_not_settle_new_request() {
        let mut flow = filled("press");
        let abandoned = flow.begin_submit().expect("first submit").attempt;
        flow.close();
        let current = flow.begin_submit().expect("second submit").attempt;
        assert_ne!(abandoned, current);

        flow.settle(abandoned, Err(SubmitError::Network));
        assert_eq!(flow.status(), &SubmissionStatus::Sending);
        assert_eq!(flow.fields().name, "Ada Lovelace");

        flow.settle(abandoned, Ok(()));
        assert_eq!(flow.status(), &SubmissionStatus::Sending);

        flow.settle(current, Ok(()));
        assert_eq!(flow.status(), &SubmissionStatus::Success);
    }

    #[test]
    fn missing_or_unknown_pathway_files_as_general() {
        for id in [None, Some("nonexistent")] {
            let flow = InquiryFlow::new(id);
            assert_eq!(flow.pathway().map(|p| p.id), Some(GENERAL_PATHWAY));
            assert_eq!(flow.category(), GENERAL_CATEGORY);
            let request = flow
                .field_specs()
                .iter()
                .find(|f| f.key == FieldKey::RequestType)
                .map(|f| f.kind);
            assert_eq!(
                request,
                find_pathway(GENERAL_PATHWAY).map(|p| FieldKind::SelectWithOther(p.options))
            );
        }
    }

    #[test]
    fn blank_other_text_blocks_submission() {
        for key in [FieldKey::RequestType, FieldKey::Timeline, FieldKey::ContactChannel] {
            let endpoint = MockEndpoint::new(Reply::Status(200, ""));
            let mut flow = filled("wholesale");
            flow.select(key, "Other");
            assert_eq!(flow.fields().choice(key), Some(&Choice::Other(String::new())));

            let err = submit(&mut flow, &endpoint).unwrap_err();
            assert_eq!(
                err,
                BeginError::Invalid(vec![FieldIssue { key, problem: Problem::MissingOther }])
            );
            assert_eq!(endpoint.calls.get(), 0);
            assert_eq!(flow.status(), &SubmissionStatus::Idle);
        }
    }

    #[test]
    fn filled_other_text_travels_in_companion_field() {
        let endpoint = MockEndpoint::new(Reply::Status(200, ""));
        let mut flow = filled("wholesale");
        flow.select(FieldKey::Timeline, "Other");
        flow.set_other_text(FieldKey::Timeline, "After harvest".into());
        submit(&mut flow, &endpoint).expect("submission should start");

        let sent = endpoint.last.borrow().clone().expect("payload recorded");
        assert_eq!(sent.get("timeline"), Some("Other"));
        assert_eq!(sent.get("timeline_other"), Some("After harvest"));
        assert_eq!(sent.get("request_type_other"), None);
    }

    #[test]
    fn other_text_is_ignored_for_listed_choice() {
        let mut flow = filled("wholesale");
        flow.set_other_text(FieldKey::Timeline, "ignored".into());
        assert_eq!(flow.fields().timeline, Choice::Listed("Within 1 month".into()));
    }

    #[test]
    fn organization_optional_only_for_general() {
        for pathway in ["wholesale", "collaboration", "press"] {
            let endpoint = MockEndpoint::new(Reply::Status(200, ""));
            let mut flow = filled(pathway);
            flow.set_text(FieldKey::Organization, "   ".into());
            assert!(flow.is_required(FieldKey::Organization));
            let err = submit(&mut flow, &endpoint).unwrap_err();
            assert_eq!(
                err,
                BeginError::Invalid(vec![FieldIssue {
                    key: FieldKey::Organization,
                    problem: Problem::Missing
                }])
            );
            assert_eq!(endpoint.calls.get(), 0);
        }

        let endpoint = MockEndpoint::new(Reply::Status(200, ""));
        let mut flow = filled("general");
        flow.set_text(FieldKey::Organization, String::new());
        submit(&mut flow, &endpoint).expect("general inquiries need no organization");
        assert_eq!(flow.status(), &SubmissionStatus::Success);
        let sent = endpoint.last.borrow().clone().expect("payload recorded");
        assert_eq!(sent.get("organization"), None);
    }

    #[test]
    fn missing_fields_are_reported_and_cleared_on_edit() {
        let mut flow = InquiryFlow::new(Some("press"));
        let err = flow.begin_submit().unwrap_err();
        let BeginError::Invalid(issues) = err else {
            panic!("expected validation failure");
        };
        assert!(issues.iter().any(|i| i.key == FieldKey::Name));
        assert!(issues.iter().all(|i| i.key != FieldKey::Phone));
        assert!(flow.issue_for(FieldKey::Name).is_some());

        flow.set_text(FieldKey::Name, "Ada".into());
        assert!(flow.issue_for(FieldKey::Name).is_none());
        assert!(flow.issue_for(FieldKey::Email).is_some());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut flow = filled("press");
        flow.set_text(FieldKey::Email, "ada.example.com".into());
        assert_eq!(
            flow.validate(),
            Err(vec![FieldIssue { key: FieldKey::Email, problem: Problem::InvalidEmail }])
        );
    }

    #[test]
    fn changing_pathway_resets_request_type() {
        let mut flow = filled("wholesale");
        flow.select_pathway(Some("wholesale"));
        assert!(matches!(flow.fields().request_type, Choice::Listed(_)));
        flow.select_pathway(Some("press"));
        assert_eq!(flow.fields().request_type, Choice::Unset);
        assert_eq!(flow.category(), "PRESS");
    }

    #[test]
    fn close_always_returns_to_idle() {
        let mut sending = filled("press");
        sending.begin_submit().expect("submit");

        let mut failed = filled("press");
        submit(&mut failed, &MockEndpoint::new(Reply::Offline)).expect("submit");

        let mut invalid = InquiryFlow::new(None);
        let _ = invalid.begin_submit();

        for mut flow in [sending, failed, invalid, InquiryFlow::default()] {
            flow.close();
            assert_eq!(flow.status(), &SubmissionStatus::Idle);
            assert!(flow.issues().is_empty());
        }
    }
}
