use log::info;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::content::pathways::PATHWAYS;
use crate::inquiry::endpoint::{FormEndpoint, InquiryEndpoint, SubmitError};
use crate::inquiry::flow::{AttemptId, BeginError, InquiryFlow, Submission, SubmissionStatus};
use crate::inquiry::model::{Choice, FieldKey, FieldKind, FieldSpec};
use crate::theme::ThemeMode;

#[derive(Properties, PartialEq)]
pub struct InquiryDialogProps {
    pub open: bool,
    #[prop_or_default]
    pub pathway: Option<&'static str>,
    pub theme: ThemeMode,
    pub on_close: Callback<()>,
}

pub enum InquiryMsg {
    Pathway(String),
    Text(FieldKey, String),
    Select(FieldKey, String),
    OtherText(FieldKey, String),
    Attach(Option<web_sys::File>),
    Submit,
    Settled(AttemptId, Result<(), SubmitError>),
    Close,
}

pub struct InquiryDialog {
    flow: InquiryFlow,
    endpoint: FormEndpoint,
}

impl Component for InquiryDialog {
    type Message = InquiryMsg;
    type Properties = InquiryDialogProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            flow: InquiryFlow::new(ctx.props().pathway),
            endpoint: FormEndpoint::from_config(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let reopened = ctx.props().open && !old_props.open;
        if reopened || ctx.props().pathway != old_props.pathway {
            self.flow.select_pathway(ctx.props().pathway);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            InquiryMsg::Pathway(id) => {
                self.flow.select_pathway(Some(id.as_str()));
                true
            }
            InquiryMsg::Text(key, value) => {
                self.flow.set_text(key, value);
                true
            }
            InquiryMsg::Select(key, raw) => {
                self.flow.select(key, &raw);
                true
            }
            InquiryMsg::OtherText(key, value) => {
                self.flow.set_other_text(key, value);
                true
            }
            InquiryMsg::Attach(file) => {
                self.flow.set_attachment(file);
                true
            }
            InquiryMsg::Submit => match self.flow.begin_submit() {
                Ok(Submission { attempt, payload }) => {
                    info!("Sending inquiry ({})", self.flow.category());
                    let endpoint = self.endpoint.clone();
                    ctx.link().send_future(async move {
                        InquiryMsg::Settled(attempt, endpoint.deliver(payload).await)
                    });
                    true
                }
                Err(BeginError::Invalid(issues)) => {
                    info!("Inquiry blocked by {} field issue(s)", issues.len());
                    true
                }
                Err(_) => false,
            },
            InquiryMsg::Settled(attempt, result) => {
                self.flow.settle(attempt, result);
                true
            }
            InquiryMsg::Close => {
                self.flow.close();
                ctx.props().on_close.emit(());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().open {
            return html! {};
        }
        let close = ctx.link().callback(|_: MouseEvent| InquiryMsg::Close);
        let close_button = close.clone();
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
        let theme_class = ctx.props().theme.as_str();

        html! {
            <div class={classes!("inquiry-backdrop", theme_class)} onclick={close}>
                <div class="inquiry-modal" onclick={keep_open}>
                    <button class="inquiry-close" onclick={close_button} aria-label="Close">{"✕"}</button>
                    {
                        if *self.flow.status() == SubmissionStatus::Success {
                            self.view_success(ctx)
                        } else {
                            self.view_form(ctx)
                        }
                    }
                </div>
                <style>{DIALOG_CSS}</style>
            </div>
        }
    }
}

impl InquiryDialog {
    fn view_success(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="inquiry-success">
                <span class="inquiry-eyebrow">{"Received"}</span>
                <h3 class="serif">{"Thank you."}</h3>
                <p>{"Your inquiry is with the Jane West team. Expect a reply within a few business days."}</p>
                <button class="inquiry-submit" onclick={ctx.link().callback(|_| InquiryMsg::Close)}>
                    {"Return to the Gallery"}
                </button>
            </div>
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            InquiryMsg::Submit
        });
        let on_pathway = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            InquiryMsg::Pathway(select.value())
        });
        let selected = self.flow.pathway().map(|p| p.id).unwrap_or("");
        let sending = *self.flow.status() == SubmissionStatus::Sending;

        html! {
            <form class="inquiry-form" onsubmit={onsubmit} novalidate=true>
                <span class="inquiry-eyebrow">{"Inquiry"}</span>
                <h3 class="serif">
                    { self.flow.pathway().map(|p| p.title).unwrap_or("Start a conversation") }
                </h3>
                if let Some(pathway) = self.flow.pathway() {
                    <p class="inquiry-desc">{pathway.desc}</p>
                }

                <label class="inquiry-field">
                    <span>{"Pathway"}</span>
                    <select onchange={on_pathway}>
                        { for PATHWAYS.iter().map(|p| html! {
                            <option value={p.id} selected={p.id == selected}>{p.title}</option>
                        }) }
                    </select>
                </label>

                { for self.flow.field_specs().iter().map(|spec| self.render_field(ctx, spec)) }

                if let SubmissionStatus::Error(message) = self.flow.status() {
                    <div class="inquiry-error" role="alert">{message}</div>
                }

                <button type="submit" class="inquiry-submit" disabled={!self.flow.can_submit()}>
                    { if sending { "Sending..." } else { "Send Inquiry" } }
                </button>
            </form>
        }
    }

    /// One renderer for every field variant.
    fn render_field(&self, ctx: &Context<Self>, spec: &FieldSpec) -> Html {
        let key = spec.key;
        let required = self.flow.is_required(key);
        let issue = self.flow.issue_for(key);
        let fields = self.flow.fields();

        let control = match spec.kind {
            FieldKind::Text | FieldKind::Email | FieldKind::Tel => {
                let input_type = match spec.kind {
                    FieldKind::Email => "email",
                    FieldKind::Tel => "tel",
                    _ => "text",
                };
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    InquiryMsg::Text(key, input.value())
                });
                html! {
                    <input
                        type={input_type}
                        name={key.wire_name()}
                        placeholder={spec.placeholder}
                        value={fields.text(key).unwrap_or_default().to_string()}
                        {required}
                        {oninput}
                    />
                }
            }
            FieldKind::TextArea => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    InquiryMsg::Text(key, input.value())
                });
                html! {
                    <textarea
                        rows="4"
                        name={key.wire_name()}
                        placeholder={spec.placeholder}
                        value={fields.text(key).unwrap_or_default().to_string()}
                        {required}
                        {oninput}
                    />
                }
            }
            FieldKind::SelectWithOther(options) => {
                let choice = fields.choice(key).cloned().unwrap_or_default();
                let onchange = ctx.link().callback(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    InquiryMsg::Select(key, select.value())
                });
                let other_input = match &choice {
                    Choice::Other(text) => {
                        let oninput = ctx.link().callback(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            InquiryMsg::OtherText(key, input.value())
                        });
                        html! {
                            <input
                                type="text"
                                class="inquiry-other"
                                name={key.other_wire_name()}
                                placeholder="Please specify"
                                value={text.clone()}
                                required=true
                                {oninput}
                            />
                        }
                    }
                    _ => html! {},
                };
                let current = choice.select_value().to_string();
                html! {
                    <>
                        <select name={key.wire_name()} {required} {onchange}>
                            <option value="" selected={current.is_empty()} disabled=true>{spec.placeholder}</option>
                            { for options.iter().map(|o| html! {
                                <option value={*o} selected={current == *o}>{*o}</option>
                            }) }
                            <option value={Choice::OTHER} selected={choice.is_other()}>{Choice::OTHER}</option>
                        </select>
                        {other_input}
                    </>
                }
            }
            FieldKind::File => {
                let onchange = ctx.link().callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    InquiryMsg::Attach(input.files().and_then(|files| files.get(0)))
                });
                html! {
                    <input type="file" name={key.wire_name()} {onchange} />
                }
            }
        };

        html! {
            <label class={classes!("inquiry-field", issue.is_some().then_some("has-issue"))}>
                <span>
                    {spec.label}
                    if required { <em class="inquiry-required">{" *"}</em> }
                </span>
                {control}
                if let Some(issue) = issue {
                    <small class="inquiry-issue">{issue.message()}</small>
                }
            </label>
        }
    }
}

const DIALOG_CSS: &str = r#"
.inquiry-backdrop {
    position: fixed;
    inset: 0;
    z-index: 110;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1.5rem;
    background: rgba(0, 0, 0, 0.6);
    backdrop-filter: blur(12px);
}
.inquiry-modal {
    position: relative;
    width: 100%;
    max-width: 640px;
    max-height: 90vh;
    overflow-y: auto;
    padding: 3.5rem;
    border-radius: 40px;
    background: var(--bg);
    color: var(--text);
    border: 1px solid var(--border);
    box-shadow: 0 24px 64px rgba(0, 0, 0, 0.35);
}
.inquiry-close {
    position: absolute;
    top: 2rem;
    right: 2rem;
    background: none;
    border: none;
    color: inherit;
    opacity: 0.4;
    font-size: 1.25rem;
    cursor: pointer;
}
.inquiry-close:hover { opacity: 1; }
.inquiry-eyebrow {
    font-size: 10px;
    font-weight: 900;
    letter-spacing: 0.6em;
    text-transform: uppercase;
    color: var(--accent);
}
.inquiry-form h3, .inquiry-success h3 {
    font-size: 2.5rem;
    font-style: italic;
    margin: 1rem 0;
}
.inquiry-desc { opacity: 0.6; margin-bottom: 2rem; }
.inquiry-field {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    margin-bottom: 1.5rem;
}
.inquiry-field > span {
    font-size: 10px;
    font-weight: 900;
    letter-spacing: 0.2em;
    text-transform: uppercase;
}
.inquiry-field input, .inquiry-field select, .inquiry-field textarea {
    width: 100%;
    padding: 0.9rem 0;
    background: transparent;
    color: inherit;
    border: none;
    border-bottom: 1px solid var(--border);
    font-weight: 600;
    outline: none;
    resize: none;
}
.inquiry-field input:focus, .inquiry-field select:focus, .inquiry-field textarea:focus {
    border-bottom-color: var(--accent);
}
.inquiry-field select option { color: #1A050A; }
.inquiry-field.has-issue input, .inquiry-field.has-issue select, .inquiry-field.has-issue textarea {
    border-bottom-color: #e11d48;
}
.inquiry-required { color: var(--accent); font-style: normal; }
.inquiry-issue { color: #e11d48; font-size: 0.75rem; }
.inquiry-other { margin-top: 0.5rem; }
.inquiry-error {
    padding: 1rem 1.25rem;
    margin-bottom: 1.5rem;
    border-radius: 16px;
    background: rgba(225, 29, 72, 0.1);
    color: #e11d48;
    font-weight: 700;
}
.inquiry-submit {
    width: 100%;
    padding: 1.4rem;
    border: none;
    border-radius: 999px;
    background: var(--text);
    color: var(--bg);
    font-size: 10px;
    font-weight: 900;
    letter-spacing: 0.3em;
    text-transform: uppercase;
    cursor: pointer;
    transition: background 0.5s, opacity 0.3s;
}
.inquiry-submit:hover { background: var(--highlight); }
.inquiry-submit:disabled { opacity: 0.5; cursor: wait; }
@media (max-width: 640px) {
    .inquiry-modal { padding: 2rem; }
}
"#;
