use yew::prelude::*;

use crate::models::Skill;

#[derive(Properties, PartialEq)]
pub struct InteractiveLearningModuleProps {
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(InteractiveLearningModule)]
pub fn interactive_learning_module(props: &InteractiveLearningModuleProps) -> Html {
    html! {
        <div class="card learning-module">
            <h3>{&props.title}</h3>
            <p>{&props.description}</p>
            <div class="module-body">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub label: AttrValue,
    pub percent: u8,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let percent = props.percent.min(100);

    html! {
        <div class="skill-row">
            <span class="skill-name">{&props.label}</span>
            <div class="skill-track">
                <div class="skill-fill" style={format!("width: {}%", percent)}></div>
            </div>
            <span class="skill-percent">{format!("{}%", percent)}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillBarsProps {
    pub skills: &'static [Skill],
}

#[function_component(SkillBars)]
pub fn skill_bars(props: &SkillBarsProps) -> Html {
    html! {
        <div class="skill-bars">
            { for props.skills.iter().map(|skill| html! {
                <ProgressBar label={skill.name} percent={skill.percent} />
            }) }
        </div>
    }
}
