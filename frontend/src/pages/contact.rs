use futures::future::AbortHandle;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::lead::intake::settle_submission;
use crate::lead::{
    BusinessType, FundingAmount, FundingNeed, LeadField, LeadOption, LeadRecord, LeadWizard,
    RevenueRange, SubmissionPhase, SubmitTicket, Timeline, WizardAction, WizardStep,
};
use crate::Route;

const PHONE_HREF: &str = "tel:+19178095707";
const PHONE_DISPLAY: &str = "+1 (917) 809-5707";
const EMAIL: &str = "info@millionaireessentials.com";
const OFFICE: &str = "Montclair, NJ";

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    field: LeadField,
    value: String,
    #[prop_or("text")]
    input_type: &'static str,
    placeholder: &'static str,
    #[prop_or_default]
    required: bool,
    on_change: Callback<(LeadField, String)>,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        let field = props.field;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    html! {
        <div class="wizard-field">
            <label>
                {props.field.label()}
                if props.required {
                    <span class="required-mark">{" *"}</span>
                }
            </label>
            <input
                type={props.input_type}
                value={props.value.clone()}
                placeholder={props.placeholder}
                oninput={oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct OptionGridProps {
    field: LeadField,
    options: Vec<&'static str>,
    selected: String,
    #[prop_or("option-grid")]
    layout: &'static str,
    on_change: Callback<(LeadField, String)>,
}

#[function_component(OptionGrid)]
fn option_grid(props: &OptionGridProps) -> Html {
    html! {
        <div class="wizard-field">
            <label>
                {props.field.label()}
                <span class="required-mark">{" *"}</span>
            </label>
            <div class={props.layout}>
                { for props.options.iter().map(|option| {
                    let onclick = {
                        let on_change = props.on_change.clone();
                        let field = props.field;
                        let option = *option;
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_change.emit((field, option.to_string()));
                        })
                    };
                    let is_selected = props.selected == *option;
                    html! {
                        <button
                            type="button"
                            key={*option}
                            class={classes!("option-button", is_selected.then(|| "selected"))}
                            onclick={onclick}
                        >
                            {*option}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StepProps {
    record: LeadRecord,
    on_change: Callback<(LeadField, String)>,
}

#[function_component(ContactDetails)]
fn contact_details(props: &StepProps) -> Html {
    let record = &props.record;
    html! {
        <div class="wizard-fields">
            <div class="field-row">
                <TextField field={LeadField::FirstName} value={record.first_name.clone()}
                    placeholder="John" required={true} on_change={props.on_change.clone()} />
                <TextField field={LeadField::LastName} value={record.last_name.clone()}
                    placeholder="Smith" on_change={props.on_change.clone()} />
            </div>
            <TextField field={LeadField::Email} value={record.email.clone()} input_type="email"
                placeholder="john@company.com" required={true} on_change={props.on_change.clone()} />
            <TextField field={LeadField::Phone} value={record.phone.clone()} input_type="tel"
                placeholder="(555) 123-4567" on_change={props.on_change.clone()} />
        </div>
    }
}

#[function_component(BusinessProfile)]
fn business_profile(props: &StepProps) -> Html {
    let record = &props.record;
    html! {
        <div class="wizard-fields">
            <OptionGrid field={LeadField::BusinessType} options={BusinessType::labels()}
                selected={record.get(LeadField::BusinessType).into_owned()}
                on_change={props.on_change.clone()} />
            <OptionGrid field={LeadField::Revenue} options={RevenueRange::labels()}
                selected={record.get(LeadField::Revenue).into_owned()}
                layout="option-grid wide" on_change={props.on_change.clone()} />
        </div>
    }
}

#[function_component(FundingRequest)]
fn funding_request(props: &StepProps) -> Html {
    let record = &props.record;
    html! {
        <div class="wizard-fields">
            <OptionGrid field={LeadField::FundingNeed} options={FundingNeed::labels()}
                selected={record.get(LeadField::FundingNeed).into_owned()}
                on_change={props.on_change.clone()} />
            <OptionGrid field={LeadField::FundingAmount} options={FundingAmount::labels()}
                selected={record.get(LeadField::FundingAmount).into_owned()}
                layout="option-grid three" on_change={props.on_change.clone()} />
            <OptionGrid field={LeadField::Timeline} options={Timeline::labels()}
                selected={record.get(LeadField::Timeline).into_owned()}
                layout="option-list" on_change={props.on_change.clone()} />
        </div>
    }
}

#[function_component(ReviewSummary)]
fn review_summary(props: &StepProps) -> Html {
    let record = &props.record;
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit((LeadField::Message, area.value()));
        })
    };

    html! {
        <div class="wizard-fields">
            <div class="summary-card">
                <h3>{"Contact"}</h3>
                <p>{record.full_name()}</p>
                <p class="muted">{&record.email}</p>
                if !record.phone.is_empty() {
                    <p class="muted">{&record.phone}</p>
                }
            </div>
            <div class="summary-card">
                <h3>{"Business"}</h3>
                <p>{record.get(LeadField::BusinessType).to_string()}</p>
                <p class="muted">{format!("{} annual revenue", record.get(LeadField::Revenue))}</p>
            </div>
            <div class="summary-card">
                <h3>{"Funding Request"}</h3>
                <p>{format!("{} for {}", record.get(LeadField::FundingAmount), record.get(LeadField::FundingNeed))}</p>
                <p class="muted">{record.get(LeadField::Timeline).to_string()}</p>
            </div>
            <div class="wizard-field">
                <label>{format!("{} (Optional)", LeadField::Message.label())}</label>
                <textarea
                    rows="4"
                    value={record.message.clone()}
                    placeholder="Anything else we should know about your situation?"
                    oninput={oninput}
                />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ReceiptProps {
    wizard: LeadWizard,
    on_reset: Callback<MouseEvent>,
}

#[function_component(SubmittedReceipt)]
fn submitted_receipt(props: &ReceiptProps) -> Html {
    let record = props.wizard.record();
    let phone = if record.phone.is_empty() {
        "the number provided".to_string()
    } else {
        record.phone.clone()
    };

    html! {
        <section class="receipt">
            <div class="receipt-check">{"✓"}</div>
            <h1>{"Thank You, "}<span class="accent">{&record.first_name}</span></h1>
            <p class="lead-text">
                {"We've received your information and an advisor will reach out within one business day to discuss your capital needs."}
            </p>
            if let Some(at) = props.wizard.submitted_at() {
                <p class="muted">{format!("Received {}", at.format("%B %-d, %Y at %H:%M UTC"))}</p>
            }
            <div class="summary-card">
                <h3>{"What happens next?"}</h3>
                <ol class="next-steps">
                    <li>{"An advisor reviews your information and prepares relevant options"}</li>
                    <li>{format!("We'll call you at {} to discuss your goals", phone)}</li>
                    <li>{"Together we'll explore the capital solutions that fit your situation"}</li>
                </ol>
            </div>
            <div class="receipt-actions">
                <Link<Route> to={Route::Home} classes="ghost-button">
                    {"Return to Home"}
                </Link<Route>>
                <button class="ghost-button" onclick={props.on_reset.clone()}>
                    {"Start another request"}
                </button>
            </div>
        </section>
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let wizard = use_reducer(LeadWizard::new);

    use_mount(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    // Runs the intake for the in-flight attempt. Unmounting or resetting
    // drops the ticket, and the cleanup aborts whatever is still waiting.
    {
        let handle = wizard.clone();
        use_effect_with_deps(
            move |ticket: &Option<SubmitTicket>| {
                let abort = ticket.map(|ticket| {
                    let (abort, registration) = AbortHandle::new_pair();
                    let record = handle.record().clone();
                    spawn_local(async move {
                        let intake = config::intake();
                        if let Some(action) = settle_submission(ticket, intake.submit(record), registration).await {
                            handle.dispatch(action);
                        }
                    });
                    abort
                });
                move || {
                    if let Some(abort) = abort {
                        abort.abort();
                    }
                }
            },
            wizard.pending_ticket(),
        );
    }

    let on_change = {
        let wizard = wizard.clone();
        Callback::from(move |(field, value): (LeadField, String)| {
            wizard.dispatch(WizardAction::SetField { field, value });
        })
    };
    let on_next = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(WizardAction::Advance))
    };
    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(WizardAction::Retreat))
    };
    let on_submit = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Submitting lead");
            wizard.dispatch(WizardAction::Submit);
        })
    };
    let on_dismiss = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(WizardAction::DismissError))
    };
    let on_reset = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(WizardAction::Reset))
    };

    if wizard.phase() == SubmissionPhase::Completed {
        return html! {
            <div class="contact-page">
                <style>{CONTACT_STYLES}</style>
                <SubmittedReceipt wizard={(*wizard).clone()} on_reset={on_reset} />
            </div>
        };
    }

    let step = wizard.step();
    let record = wizard.record().clone();
    let is_pending = wizard.phase() == SubmissionPhase::Pending;
    let can_continue = wizard.can_advance(step);
    let missing = wizard
        .missing_fields(step)
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ");

    let step_content = match step {
        WizardStep::Contact => html! { <ContactDetails record={record} on_change={on_change.clone()} /> },
        WizardStep::Business => html! { <BusinessProfile record={record} on_change={on_change.clone()} /> },
        WizardStep::FundingNeeds => html! { <FundingRequest record={record} on_change={on_change.clone()} /> },
        WizardStep::Review => html! { <ReviewSummary record={record} on_change={on_change.clone()} /> },
    };

    html! {
        <div class="contact-page">
            <style>{CONTACT_STYLES}</style>
            <div class="contact-grid">
                <section class="contact-info">
                    <span class="overline">{"Get in Touch"}</span>
                    <h1>{"Begin the "}<span class="accent">{"Conversation"}</span></h1>
                    <p class="lead-text">
                        {"Tell us about your business and what you're looking to accomplish. An advisor will reach out within one business day."}
                    </p>
                    <a class="channel" href={PHONE_HREF}>
                        <span class="muted">{"Call us"}</span>
                        <span>{PHONE_DISPLAY}</span>
                    </a>
                    <a class="channel" href={format!("mailto:{}", EMAIL)}>
                        <span class="muted">{"Email us"}</span>
                        <span>{EMAIL}</span>
                    </a>
                    <div class="channel">
                        <span class="muted">{"Visit us"}</span>
                        <span>{OFFICE}</span>
                    </div>
                    <p class="trust-note">
                        <strong>{"Trusted by 500+ business owners"}</strong>
                        {" across 40+ industries. Your information is kept confidential and never shared."}
                    </p>
                </section>

                <section class="wizard-card">
                    <div class="progress-header">
                        <span>{format!("Step {} of {}", step.number(), wizard.total_steps())}</span>
                        <span>{format!("{}% complete", wizard.progress_percent())}</span>
                    </div>
                    <div class="progress-track">
                        <div class="progress-fill" style={format!("width: {}%;", wizard.progress_fraction() * 100.0)}></div>
                    </div>

                    <div class="step-heading">
                        <h2>{step.title()}</h2>
                        <p class="muted">{step.subtitle()}</p>
                    </div>

                    if let Some(error) = wizard.last_error() {
                        <div class="error-banner">
                            <span>{format!("We couldn't send your request: {}. Your answers are saved, please try again.", error)}</span>
                            <button onclick={on_dismiss}>{"✕"}</button>
                        </div>
                    }

                    <div class="step-content">
                        {step_content}
                    </div>

                    <div class="wizard-nav">
                        if step.previous().is_some() {
                            <button class="ghost-button" onclick={on_back} disabled={is_pending}>
                                {"← Back"}
                            </button>
                        } else {
                            <div></div>
                        }
                        if step.is_last() {
                            <button class="primary-button" onclick={on_submit} disabled={is_pending}>
                                if is_pending {
                                    <span class="spinner"></span>{" Submitting..."}
                                } else {
                                    {"Submit Request"}
                                }
                            </button>
                        } else {
                            <div class="continue-wrap">
                                if !can_continue {
                                    <span class="missing-hint">{format!("Required: {}", missing)}</span>
                                }
                                <button class="primary-button" onclick={on_next} disabled={!can_continue}>
                                    {"Continue →"}
                                </button>
                            </div>
                        }
                    </div>
                </section>
            </div>
        </div>
    }
}

const CONTACT_STYLES: &str = r#"
.contact-page {
    min-height: 100vh;
    padding: 8rem 2rem 5rem;
    color: #f5f1e8;
    background: #0d0d0d;
}
.contact-grid {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 2fr 3fr;
    gap: 4rem;
}
.overline {
    display: block;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-size: 0.75rem;
    color: #c9a961;
    margin-bottom: 1rem;
}
.contact-info h1, .receipt h1 {
    font-size: 3rem;
    margin-bottom: 1.5rem;
}
.accent { color: #c9a961; }
.muted { color: rgba(245, 241, 232, 0.6); }
.lead-text {
    font-size: 1.1rem;
    color: rgba(245, 241, 232, 0.75);
    margin-bottom: 2rem;
}
.channel {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
    padding: 1rem;
    margin-bottom: 1rem;
    border-radius: 12px;
    background: #161616;
    border: 1px solid rgba(255, 255, 255, 0.08);
    color: inherit;
    text-decoration: none;
}
a.channel:hover { border-color: rgba(201, 169, 97, 0.3); }
.trust-note {
    padding: 1rem;
    border-radius: 12px;
    background: #1c1c1c;
    font-size: 0.9rem;
}
.wizard-card {
    background: #161616;
    border: 1px solid rgba(255, 255, 255, 0.08);
    border-radius: 16px;
    padding: 2.5rem;
}
.progress-header {
    display: flex;
    justify-content: space-between;
    font-size: 0.85rem;
    color: rgba(245, 241, 232, 0.5);
    margin-bottom: 0.5rem;
}
.progress-track {
    height: 4px;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.08);
    overflow: hidden;
    margin-bottom: 2rem;
}
.progress-fill {
    height: 100%;
    background: #c9a961;
    transition: width 0.5s ease-out;
}
.step-heading h2 { font-size: 1.3rem; margin-bottom: 0.25rem; }
.step-heading { margin-bottom: 1.5rem; }
.step-content { min-height: 400px; }
.wizard-fields { display: flex; flex-direction: column; gap: 1.25rem; }
.field-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.wizard-field label { display: block; font-size: 0.9rem; margin-bottom: 0.5rem; }
.required-mark { color: #c9a961; }
.wizard-field input, .wizard-field textarea {
    width: 100%;
    padding: 0.75rem 1rem;
    background: #0d0d0d;
    border: 1px solid rgba(255, 255, 255, 0.08);
    border-radius: 8px;
    color: inherit;
    resize: none;
}
.wizard-field input:focus, .wizard-field textarea:focus {
    outline: none;
    border-color: #c9a961;
}
.option-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; }
.option-grid.wide { grid-template-columns: repeat(4, 1fr); }
.option-grid.three { grid-template-columns: repeat(3, 1fr); }
.option-list { display: flex; flex-direction: column; gap: 0.5rem; }
.option-button {
    padding: 0.75rem 1rem;
    font-size: 0.85rem;
    text-align: left;
    border-radius: 8px;
    border: 1px solid rgba(255, 255, 255, 0.08);
    background: transparent;
    color: inherit;
    cursor: pointer;
    transition: border-color 0.2s ease;
}
.option-button:hover { border-color: rgba(201, 169, 97, 0.5); }
.option-button.selected {
    border-color: #c9a961;
    background: rgba(201, 169, 97, 0.1);
    color: #c9a961;
}
.summary-card {
    padding: 1rem;
    border-radius: 8px;
    background: #0d0d0d;
    border: 1px solid rgba(255, 255, 255, 0.08);
    text-align: left;
}
.summary-card h3 {
    font-size: 0.85rem;
    color: rgba(245, 241, 232, 0.5);
    margin-bottom: 0.5rem;
}
.error-banner {
    display: flex;
    justify-content: space-between;
    gap: 1rem;
    padding: 0.75rem 1rem;
    margin-bottom: 1.5rem;
    border-radius: 8px;
    background: rgba(220, 80, 80, 0.12);
    border: 1px solid rgba(220, 80, 80, 0.4);
}
.error-banner button { background: none; border: none; color: inherit; cursor: pointer; }
.wizard-nav {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding-top: 1.5rem;
    border-top: 1px solid rgba(255, 255, 255, 0.08);
}
.continue-wrap { display: flex; align-items: center; gap: 1rem; }
.missing-hint { font-size: 0.8rem; color: rgba(245, 241, 232, 0.5); }
.primary-button, .ghost-button {
    padding: 0.75rem 1.5rem;
    border-radius: 999px;
    cursor: pointer;
    font-size: 0.95rem;
    text-decoration: none;
}
.primary-button {
    background: #c9a961;
    color: #0d0d0d;
    border: none;
}
.primary-button:disabled { opacity: 0.4; cursor: not-allowed; }
.ghost-button {
    background: transparent;
    color: inherit;
    border: 1px solid rgba(255, 255, 255, 0.2);
}
.spinner {
    display: inline-block;
    width: 14px;
    height: 14px;
    border: 2px solid rgba(13, 13, 13, 0.3);
    border-radius: 50%;
    border-top-color: #0d0d0d;
    animation: spin 1s ease-in-out infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.receipt {
    max-width: 640px;
    margin: 0 auto;
    text-align: center;
}
.receipt-check {
    width: 80px;
    height: 80px;
    margin: 0 auto 2rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 2rem;
    color: #c9a961;
    background: rgba(201, 169, 97, 0.2);
}
.next-steps { padding-left: 1.25rem; display: flex; flex-direction: column; gap: 0.75rem; }
.receipt-actions { display: flex; justify-content: center; gap: 1rem; margin-top: 2rem; }
@media (max-width: 900px) {
    .contact-grid { grid-template-columns: 1fr; gap: 3rem; }
    .option-grid.wide, .option-grid.three { grid-template-columns: 1fr 1fr; }
    .field-row { grid-template-columns: 1fr; }
}
"#;
