use yew::prelude::*;

use crate::components::cards::{
    FeatureCard, InsightCard, PricingCard, TestimonialCard, UserTypeSection,
};
use crate::components::faq::FaqItem;
use crate::components::icon::IconGlyph;
use crate::components::learning_module::{InteractiveLearningModule, SkillBars};
use crate::components::progress_chart::ProgressChart;
use crate::config;
use crate::content::{
    FAQS, FEATURES, INSIGHTS, PRICING_TIERS, SKILLS, STATS, TESTIMONIALS, USER_TYPES,
};
use crate::models::Icon;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            // Hero Section
            <header class="hero">
                <div class="hero-inner">
                    <h1>{"Learn, Play, Grow Together"}</h1>
                    <p class="hero-subtitle">
                        {"An adaptive learning platform that grows with your child, making education fun and engaging through personalized experiences."}
                    </p>
                    <div class="hero-actions">
                        <button class="cta-primary">{"Start Learning"}</button>
                        <button class="cta-outline">{"Watch Demo"}</button>
                    </div>
                </div>
            </header>

            // Features Section
            <section class="section features">
                <h2>{"Empowering Every Learning Journey"}</h2>
                <div class="grid grid-3">
                    { for FEATURES.iter().map(|f| html! {
                        <FeatureCard icon={f.icon} title={f.title} description={f.description} />
                    }) }
                </div>
            </section>

            // User Types Section
            <section class="section user-types muted">
                <h2>{"Tailored for Everyone"}</h2>
                <div class="grid grid-3">
                    { for USER_TYPES.iter().map(|u| html! {
                        <UserTypeSection icon={u.icon} title={u.title} benefits={u.benefits} />
                    }) }
                </div>
            </section>

            // Pricing Section
            <section class="section pricing">
                <h2>{"Simple, Transparent Pricing"}</h2>
                <p class="section-lead">
                    {"Choose the perfect plan for your child's learning journey. All plans include access to our core features and personalized learning paths."}
                </p>
                <div class="grid grid-3 narrow">
                    { for PRICING_TIERS.iter().map(|t| html! {
                        <PricingCard
                            title={t.title}
                            price={t.price}
                            description={t.description}
                            features={t.features}
                            popular={t.popular}
                        />
                    }) }
                </div>
            </section>

            // Testimonials Section
            <section class="section testimonials">
                <h2>{"What Our Users Say"}</h2>
                <div class="grid grid-3">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <TestimonialCard name={t.name} role={t.role} quote={t.quote} image={t.image} />
                    }) }
                </div>
            </section>

            // FAQ Section
            <section class="section faq muted">
                <h2>{"Frequently Asked Questions"}</h2>
                <div class="faq-list">
                    { for FAQS.iter().map(|faq| html! {
                        <FaqItem question={faq.question} answer={faq.answer} />
                    }) }
                </div>
            </section>

            // AI Insights Section
            <section class="section insights">
                <h2>{"AI-Powered Learning Insights"}</h2>
                <p class="section-lead">
                    {"Our advanced AI system analyzes your learning patterns to provide personalized insights and recommendations for optimal progress."}
                </p>
                <div class="grid grid-3">
                    { for INSIGHTS.iter().map(|i| html! {
                        <InsightCard
                            icon={i.icon}
                            title={i.title}
                            description={i.description}
                            metric={i.metric}
                        />
                    }) }
                </div>
            </section>

            // Interactive Learning Modules Section
            <section class="section modules muted">
                <h2>{"Interactive Learning Modules"}</h2>
                <p class="section-lead">
                    {"Engage with our interactive learning tools designed to make complex concepts simple and fun to learn."}
                </p>
                <div class="grid grid-2">
                    <InteractiveLearningModule
                        title="Progress Overview"
                        description="Track your learning journey with detailed analytics"
                    >
                        <ProgressChart />
                    </InteractiveLearningModule>
                    <InteractiveLearningModule
                        title="Skill Assessment"
                        description="Real-time evaluation of your current skill level"
                    >
                        <SkillBars skills={SKILLS} />
                    </InteractiveLearningModule>
                </div>
            </section>

            // Stats Section
            <section class="stats">
                <div class="grid grid-3">
                    { for STATS.iter().map(|s| html! {
                        <div class="stat">
                            <div class="stat-value">{s.value}</div>
                            <div class="stat-label">{s.label}</div>
                        </div>
                    }) }
                </div>
            </section>

            // CTA Section
            <section class="section cta">
                <div class="cta-panel">
                    <h2>{"Start Your Learning Adventure Today"}</h2>
                    <p>{"Join millions of students worldwide and discover the joy of learning."}</p>
                    <button class="cta-light">{"Get Started Free"}</button>
                </div>
            </section>

            <footer class="footer">
                <div class="footer-inner">
                    <div class="footer-brand">
                        <IconGlyph icon={Icon::BookOpen} />
                        <span>{config::SITE_NAME}</span>
                    </div>
                    <div class="footer-copy">
                        {format!("© {} {}. All rights reserved.", config::COPYRIGHT_YEAR, config::SITE_NAME)}
                    </div>
                </div>
            </footer>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #eef2ff, #ffffff);
                    color: #111827;
                    font-family: system-ui, -apple-system, sans-serif;
                }

                .hero {
                    padding: 6rem 1rem;
                    text-align: center;
                }

                .hero-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .hero h1 {
                    font-size: 3.75rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #4b5563;
                    margin-bottom: 2rem;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                }

                .cta-primary, .cta-outline, .cta-light, .pricing-button {
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background-color 0.2s ease;
                }

                .cta-primary {
                    background: #4f46e5;
                    color: #fff;
                    border: none;
                }

                .cta-primary:hover {
                    background: #4338ca;
                }

                .cta-outline {
                    background: #fff;
                    color: #4f46e5;
                    border: 2px solid #4f46e5;
                }

                .cta-outline:hover, .cta-light:hover {
                    background: #eef2ff;
                }

                .section {
                    padding: 4rem 1rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .section.muted {
                    background: #f9fafb;
                }

                .section h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .section-lead {
                    color: #4b5563;
                    text-align: center;
                    max-width: 42rem;
                    margin: -2rem auto 3rem;
                }

                .grid {
                    display: grid;
                    gap: 2rem;
                }

                .grid-2 { grid-template-columns: repeat(2, 1fr); }
                .grid-3 { grid-template-columns: repeat(3, 1fr); }
                .grid.narrow { max-width: 64rem; margin: 0 auto; }

                .card {
                    background: #fff;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transition: box-shadow 0.2s ease;
                }

                .feature-card:hover {
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.15);
                }

                .card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                    color: #1f2937;
                }

                .card p {
                    color: #4b5563;
                }

                .card-icon {
                    display: inline-flex;
                    padding: 0.5rem;
                    background: #e0e7ff;
                    border-radius: 0.5rem;
                    margin-bottom: 1rem;
                }

                .card-icon.round {
                    border-radius: 9999px;
                    padding: 0.75rem;
                    margin: 0 1rem 0 0;
                }

                .card-icon.purple {
                    background: #f3e8ff;
                    margin: 0;
                }

                .icon {
                    display: inline-block;
                    line-height: 1;
                }

                .user-type-header, .insight-header, .testimonial-header {
                    display: flex;
                    align-items: center;
                    margin-bottom: 1rem;
                }

                .insight-header h3 {
                    margin: 0 0 0 0.75rem;
                }

                .benefits, .plan-features {
                    list-style: none;
                    padding: 0;
                }

                .benefits li, .plan-features li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.5rem;
                    margin-bottom: 0.75rem;
                    color: #374151;
                }

                .bullet {
                    flex-shrink: 0;
                    width: 0.5rem;
                    height: 0.5rem;
                    margin-top: 0.5rem;
                    background: #4f46e5;
                    border-radius: 9999px;
                }

                .pricing-card {
                    position: relative;
                    padding: 2rem;
                }

                .pricing-card.popular {
                    border: 2px solid #4f46e5;
                }

                .popular-tag {
                    position: absolute;
                    top: 0;
                    right: 0;
                    background: #4f46e5;
                    color: #fff;
                    padding: 0.25rem 1rem;
                    border-radius: 0 0.75rem 0 0.75rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                }

                .price .amount {
                    font-size: 2.25rem;
                    font-weight: 700;
                }

                .price .period {
                    color: #4b5563;
                }

                .plan-features .icon {
                    color: #4f46e5;
                }

                .pricing-button {
                    width: 100%;
                    border: none;
                }

                .pricing-button.primary {
                    background: #4f46e5;
                    color: #fff;
                }

                .pricing-button.primary:hover {
                    background: #4338ca;
                }

                .pricing-button.secondary {
                    background: #f3f4f6;
                    color: #111827;
                }

                .pricing-button.secondary:hover {
                    background: #e5e7eb;
                }

                .testimonial-card {
                    padding: 2rem;
                }

                .avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    object-fit: cover;
                    margin-right: 1rem;
                }

                .testimonial-card .role {
                    font-size: 0.875rem;
                }

                .quote {
                    font-style: italic;
                }

                .stars {
                    display: flex;
                    color: #facc15;
                    margin-top: 1rem;
                }

                .faq-list {
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .faq-item {
                    border-bottom: 1px solid #e5e7eb;
                    padding: 1rem 0;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    text-align: left;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                }

                .toggle-icon {
                    color: #4b5563;
                    font-size: 0.875rem;
                }

                .faq-answer {
                    margin-top: 0.5rem;
                    color: #4b5563;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }

                .reveal.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                .metric {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #9333ea;
                    margin-top: 1rem;
                }

                .module-body {
                    background: #f9fafb;
                    border-radius: 0.5rem;
                    padding: 1rem;
                }

                .progress-chart {
                    position: relative;
                    display: inline-block;
                    height: 16rem;
                }

                .chart-tooltip {
                    position: absolute;
                    top: 0.5rem;
                    transform: translateX(-50%);
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.25rem;
                    padding: 0.25rem 0.5rem;
                    font-size: 0.875rem;
                    pointer-events: none;
                    white-space: nowrap;
                    color: #6366f1;
                }

                .skill-bars {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .skill-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    color: #374151;
                }

                .skill-track {
                    width: 16rem;
                    height: 0.625rem;
                    background: #e5e7eb;
                    border-radius: 9999px;
                }

                .skill-fill {
                    height: 100%;
                    background: #4f46e5;
                    border-radius: 9999px;
                }

                .skill-percent {
                    font-weight: 600;
                }

                .stats {
                    background: #4f46e5;
                    color: #fff;
                    padding: 4rem 1rem;
                    margin-top: 4rem;
                    text-align: center;
                }

                .stat-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .stat-label {
                    color: #c7d2fe;
                }

                .cta-panel {
                    background: linear-gradient(to right, #6366f1, #9333ea);
                    border-radius: 1rem;
                    padding: 3rem;
                    text-align: center;
                    color: #fff;
                }

                .cta-panel h2 {
                    margin-bottom: 1rem;
                }

                .cta-panel p {
                    font-size: 1.125rem;
                    margin-bottom: 2rem;
                    color: #e0e7ff;
                }

                .cta-light {
                    background: #fff;
                    color: #4f46e5;
                    border: none;
                }

                .footer {
                    background: #f9fafb;
                    padding: 3rem 1rem;
                }

                .footer-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 600;
                }

                .footer-copy {
                    color: #4b5563;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 3rem;
                    }

                    .hero-actions {
                        flex-direction: column;
                    }

                    .grid-2, .grid-3 {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::cards::STAR_COUNT;
    use yew::ServerRenderer;

    async fn render_page() -> String {
        ServerRenderer::<Landing>::new().render().await
    }

    #[tokio::test]
    async fn sections_appear_in_order() {
        let html = render_page().await;
        let headings = [
            "Learn, Play, Grow Together",
            "Empowering Every Learning Journey",
            "Tailored for Everyone",
            "Simple, Transparent Pricing",
            "What Our Users Say",
            "Frequently Asked Questions",
            "AI-Powered Learning Insights",
            "Interactive Learning Modules",
            "Active Learners",
            "Start Your Learning Adventure Today",
            "All rights reserved.",
        ];

        let positions: Vec<usize> = headings
            .iter()
            .map(|h| html.find(h).unwrap_or_else(|| panic!("missing section {h}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn exactly_one_most_popular_badge() {
        let html = render_page().await;
        assert_eq!(html.matches("Most Popular").count(), 1);

        let badge = html.find("Most Popular").unwrap();
        let premium = html.find("$19.99").unwrap();
        let basic = html.find("$9.99").unwrap();
        let family = html.find("$29.99").unwrap();
        assert!(basic < badge && badge < premium && premium < family);
    }

    #[tokio::test]
    async fn every_card_is_rendered() {
        let html = render_page().await;
        for feature in FEATURES {
            assert!(html.contains(feature.title));
        }
        for user_type in USER_TYPES {
            assert!(html.contains(user_type.title));
            for benefit in user_type.benefits {
                assert!(html.contains(benefit));
            }
        }
        for insight in INSIGHTS {
            assert!(html.contains(insight.metric));
        }
        for faq in FAQS {
            assert!(html.contains(faq.question));
        }
        assert_eq!(
            html.matches(Icon::Star.glyph()).count(),
            STAR_COUNT * TESTIMONIALS.len()
        );
    }

    #[tokio::test]
    async fn faq_answers_start_collapsed() {
        let html = render_page().await;
        for faq in FAQS {
            assert!(!html.contains(faq.answer));
        }
        assert_eq!(html.matches("aria-expanded=\"false\"").count(), FAQS.len());
    }

    #[tokio::test]
    async fn skill_bars_use_literal_widths() {
        let html = render_page().await;
        for width in ["width: 85%", "width: 75%", "width: 90%"] {
            assert!(html.contains(width), "missing {width}");
        }
    }

    #[tokio::test]
    async fn only_avatars_are_remote() {
        let html = render_page().await;
        assert_eq!(html.matches("https://").count(), TESTIMONIALS.len());
        assert_eq!(html.matches("images.unsplash.com").count(), TESTIMONIALS.len());
    }

    #[tokio::test]
    async fn footer_credits_brand() {
        let html = render_page().await;
        assert!(html.contains("© 2025 EduTech. All rights reserved."));
    }
}
