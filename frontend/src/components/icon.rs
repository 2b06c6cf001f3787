use yew::prelude::*;

use crate::models::Icon;

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    let icon = props.icon;

    html! {
        <span
            class={classes!("icon", format!("icon-{}", icon.label()), props.class.clone())}
            role="img"
            aria-label={icon.label()}
        >
            {icon.glyph()}
        </span>
    }
}
