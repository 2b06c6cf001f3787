use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::models::Icon;

/// Expanded state of a single FAQ entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Closed => Disclosure::Open,
            Disclosure::Open => Disclosure::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Disclosure::Open
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct FaqEntryProps {
    pub question: AttrValue,
    pub answer: AttrValue,
    pub disclosure: Disclosure,
    #[prop_or_default]
    pub on_toggle: Callback<MouseEvent>,
}

/// Stateless markup for one FAQ entry in a given disclosure state.
#[function_component(FaqEntry)]
pub fn faq_entry(props: &FaqEntryProps) -> Html {
    let is_open = props.disclosure.is_open();

    html! {
        <div class={classes!("faq-item", is_open.then(|| "open"))}>
            <button
                class="faq-question"
                onclick={props.on_toggle.clone()}
                aria-expanded={is_open.to_string()}
            >
                <span class="question-text">{&props.question}</span>
                <IconGlyph
                    icon={if is_open { Icon::ChevronUp } else { Icon::ChevronDown }}
                    class="toggle-icon"
                />
            </button>
            {
                if is_open {
                    html! { <div class="faq-answer">{&props.answer}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let state = use_state(Disclosure::default);

    let toggle = {
        let state = state.clone();
        let question = props.question.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = state.toggled();
            log::debug!("FAQ '{}' -> {:?}", question, next);
            state.set(next);
        })
    };

    html! {
        <FaqEntry
            question={props.question.clone()}
            answer={props.answer.clone()}
            disclosure={*state}
            on_toggle={toggle}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[test]
    fn starts_closed() {
        assert_eq!(Disclosure::default(), Disclosure::Closed);
        assert!(!Disclosure::default().is_open());
    }

    #[test]
    fn one_toggle_opens() {
        assert_eq!(Disclosure::Closed.toggled(), Disclosure::Open);
        assert!(Disclosure::Closed.toggled().is_open());
    }

    #[test]
    fn double_toggle_returns_to_initial() {
        for start in [Disclosure::Closed, Disclosure::Open] {
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[tokio::test]
    async fn answer_hidden_on_first_render() {
        let html = ServerRenderer::<FaqItem>::with_props(|| FaqItemProps {
            question: "Is the platform accessible offline?".into(),
            answer: "Yes, you can download lessons".into(),
        })
        .render()
        .await;

        assert!(html.contains("Is the platform accessible offline?"));
        assert!(!html.contains("Yes, you can download lessons"));
        assert!(html.contains(Icon::ChevronDown.glyph()));
        assert!(!html.contains(Icon::ChevronUp.glyph()));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    async fn render_entry(disclosure: Disclosure) -> String {
        ServerRenderer::<FaqEntry>::with_props(move || FaqEntryProps {
            question: "Can I track my child's progress?".into(),
            answer: "Parents have access to a comprehensive dashboard".into(),
            disclosure,
            on_toggle: Callback::noop(),
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn open_entry_shows_answer() {
        let html = render_entry(Disclosure::Open).await;

        assert!(html.contains("Parents have access to a comprehensive dashboard"));
        assert!(html.contains("faq-answer"));
        assert!(html.contains(Icon::ChevronUp.glyph()));
        assert!(!html.contains(Icon::ChevronDown.glyph()));
        assert!(html.contains("aria-expanded=\"true\""));
    }

    #[tokio::test]
    async fn closed_entry_hides_answer() {
        let html = render_entry(Disclosure::Closed).await;

        assert!(!html.contains("Parents have access to a comprehensive dashboard"));
        assert!(!html.contains("faq-answer"));
        assert!(html.contains(Icon::ChevronDown.glyph()));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[tokio::test]
    async fn double_toggle_renders_like_initial_state() {
        let initial = render_entry(Disclosure::default()).await;
        let opened = Disclosure::default().toggled();
        assert_ne!(render_entry(opened).await, initial);
        assert_eq!(render_entry(opened.toggled()).await, initial);
    }
}
