use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::reveal::use_reveal_once;
use crate::models::Icon;

/// Testimonials always show a full five-star rating.
pub const STAR_COUNT: usize = 5;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="card feature-card">
            <div class="card-icon">
                <IconGlyph icon={props.icon} />
            </div>
            <h3>{&props.title}</h3>
            <p>{&props.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub name: AttrValue,
    pub role: AttrValue,
    pub quote: AttrValue,
    pub image: AttrValue,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    html! {
        <div class="card testimonial-card">
            <div class="testimonial-header">
                <img class="avatar" src={props.image.clone()} alt={props.name.clone()} />
                <div>
                    <h4>{&props.name}</h4>
                    <p class="role">{&props.role}</p>
                </div>
            </div>
            <p class="quote">{format!("\"{}\"", props.quote)}</p>
            <div class="stars">
                { for (0..STAR_COUNT).map(|_| html! { <IconGlyph icon={Icon::Star} /> }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct UserTypeSectionProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub benefits: &'static [&'static str],
}

#[function_component(UserTypeSection)]
pub fn user_type_section(props: &UserTypeSectionProps) -> Html {
    html! {
        <div class="card user-type-card">
            <div class="user-type-header">
                <div class="card-icon round">
                    <IconGlyph icon={props.icon} />
                </div>
                <h3>{&props.title}</h3>
            </div>
            <ul class="benefits">
                { for props.benefits.iter().map(|benefit| html! {
                    <li><span class="bullet"></span><span>{*benefit}</span></li>
                }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub title: AttrValue,
    pub price: AttrValue,
    pub description: AttrValue,
    pub features: &'static [&'static str],
    #[prop_or_default]
    pub popular: bool,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let button_class = if props.popular {
        "pricing-button primary"
    } else {
        "pricing-button secondary"
    };

    html! {
        <div class={classes!("card", "pricing-card", props.popular.then(|| "popular"))}>
            {
                if props.popular {
                    html! { <div class="popular-tag">{"Most Popular"}</div> }
                } else {
                    html! {}
                }
            }
            <h3>{&props.title}</h3>
            <div class="price">
                <span class="amount">{format!("${}", props.price)}</span>
                <span class="period">{"/month"}</span>
            </div>
            <p class="description">{&props.description}</p>
            <ul class="plan-features">
                { for props.features.iter().map(|feature| html! {
                    <li><IconGlyph icon={Icon::Check} /><span>{*feature}</span></li>
                }) }
            </ul>
            <button class={button_class}>{"Get Started"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InsightCardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub description: AttrValue,
    pub metric: AttrValue,
}

#[function_component(InsightCard)]
pub fn insight_card(props: &InsightCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_once(node.clone());

    html! {
        <div ref={node} class={classes!("card", "insight-card", "reveal", revealed.then(|| "revealed"))}>
            <div class="insight-header">
                <div class="card-icon purple">
                    <IconGlyph icon={props.icon} />
                </div>
                <h3>{&props.title}</h3>
            </div>
            <p>{&props.description}</p>
            <div class="metric">{&props.metric}</div>
        </div>
    }
}
