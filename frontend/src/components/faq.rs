use yew::prelude::*;

#[derive(Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Clicking the open question closes it; clicking another one moves the
/// single open slot there.
pub fn next_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    match open {
        Some(current) if current == clicked => None,
        _ => Some(clicked),
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub items: &'static [Faq],
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="faq-list">
            { for props.items.iter().enumerate().map(|(index, faq)| {
                let is_open = *open == Some(index);
                let onclick = {
                    let open = open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        open.set(next_open(*open, index));
                    })
                };
                html! {
                    <div class={classes!("faq-item", is_open.then(|| "open"))}>
                        <button class="faq-question" {onclick} aria-expanded={is_open.to_string()}>
                            <span>{faq.question}</span>
                            <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                        </button>
                        if is_open {
                            <p class="faq-answer">{faq.answer}</p>
                        }
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn opening_a_question_closes_the_previous_one() {
        assert_eq!(next_open(None, 2), Some(2));
        assert_eq!(next_open(Some(2), 0), Some(0));
    }

    #[test]
    fn clicking_the_open_question_collapses_it() {
        assert_eq!(next_open(Some(1), 1), None);
    }
}
