/// Glyphs used across the landing page. Rendered as unicode symbols so the
/// page has no icon font or sprite sheet to load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Brain,
    Trophy,
    Globe,
    Layout,
    MessageCircle,
    PersonStanding,
    GraduationCap,
    Heart,
    Users,
    Zap,
    Target,
    BarChart,
    BookOpen,
    Star,
    Check,
    ChevronUp,
    ChevronDown,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Brain => "🧠",
            Icon::Trophy => "🏆",
            Icon::Globe => "🌍",
            Icon::Layout => "🧩",
            Icon::MessageCircle => "💬",
            Icon::PersonStanding => "🧍",
            Icon::GraduationCap => "🎓",
            Icon::Heart => "❤",
            Icon::Users => "👥",
            Icon::Zap => "⚡",
            Icon::Target => "🎯",
            Icon::BarChart => "📊",
            Icon::BookOpen => "📖",
            Icon::Star => "★",
            Icon::Check => "✓",
            Icon::ChevronUp => "▲",
            Icon::ChevronDown => "▼",
        }
    }

    /// Accessible name, also used as the css modifier class.
    pub fn label(self) -> &'static str {
        match self {
            Icon::Brain => "brain",
            Icon::Trophy => "trophy",
            Icon::Globe => "globe",
            Icon::Layout => "layout",
            Icon::MessageCircle => "message-circle",
            Icon::PersonStanding => "person-standing",
            Icon::GraduationCap => "graduation-cap",
            Icon::Heart => "heart",
            Icon::Users => "users",
            Icon::Zap => "zap",
            Icon::Target => "target",
            Icon::BarChart => "bar-chart",
            Icon::BookOpen => "book-open",
            Icon::Star => "star",
            Icon::Check => "check",
            Icon::ChevronUp => "chevron-up",
            Icon::ChevronDown => "chevron-down",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UserType {
    pub icon: Icon,
    pub title: &'static str,
    pub benefits: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub metric: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingTier {
    pub title: &'static str,
    /// Monthly price without currency sign, e.g. "19.99".
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub percent: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}
