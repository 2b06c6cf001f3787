// Literal copy and figures shown on the landing page.

use crate::models::{
    ChartPoint, Faq, Feature, Icon, Insight, PricingTier, Skill, Stat, Testimonial, UserType,
};

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Brain,
        title: "Personalized Learning",
        description: "Adaptive learning paths that adjust to your child's progress and learning style.",
    },
    Feature {
        icon: Icon::Trophy,
        title: "Gamified Experience",
        description: "Earn rewards, collect badges, and track progress through fun achievements.",
    },
    Feature {
        icon: Icon::Globe,
        title: "Learn Anywhere",
        description: "Access content offline and sync progress across all your devices.",
    },
    Feature {
        icon: Icon::Layout,
        title: "Multiple Formats",
        description: "Interactive videos, games, and quizzes to support different learning styles.",
    },
    Feature {
        icon: Icon::MessageCircle,
        title: "AI-Powered Support",
        description: "Get instant help and guidance from our intelligent tutoring system.",
    },
    Feature {
        icon: Icon::PersonStanding,
        title: "Inclusive Learning",
        description: "Accessible design with support for various learning needs and abilities.",
    },
];

pub const USER_TYPES: &[UserType] = &[
    UserType {
        icon: Icon::GraduationCap,
        title: "For Students",
        benefits: &[
            "Personalized learning paths",
            "Interactive games and quizzes",
            "Progress tracking and rewards",
            "AI-powered homework help",
        ],
    },
    UserType {
        icon: Icon::Heart,
        title: "For Parents",
        benefits: &[
            "Real-time progress monitoring",
            "Detailed performance reports",
            "Screen time management",
            "Regular progress updates",
        ],
    },
    UserType {
        icon: Icon::Users,
        title: "For Teachers",
        benefits: &[
            "Classroom management tools",
            "Assignment creation and grading",
            "Student analytics dashboard",
            "Curriculum customization",
        ],
    },
];

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        title: "Basic",
        price: "9.99",
        description: "Perfect for getting started with personalized learning",
        features: &[
            "Access to core subjects",
            "Basic progress tracking",
            "Limited practice exercises",
            "Email support",
        ],
        popular: false,
    },
    PricingTier {
        title: "Premium",
        price: "19.99",
        description: "Our most popular plan for serious learners",
        features: &[
            "All Basic features",
            "Advanced analytics",
            "Unlimited practice exercises",
            "Priority support",
            "Parent dashboard",
        ],
        popular: true,
    },
    PricingTier {
        title: "Family",
        price: "29.99",
        description: "Best value for families with multiple children",
        features: &[
            "All Premium features",
            "Up to 4 child accounts",
            "Family progress dashboard",
            "24/7 priority support",
            "Personalized tutoring",
        ],
        popular: false,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Parent of two",
        quote: "The personalized learning approach has made such a difference for both my children. They're excited to learn every day!",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=crop&w=128&h=128&q=80",
    },
    Testimonial {
        name: "Michael Chen",
        role: "4th Grade Teacher",
        quote: "As a teacher, the analytics and progress tracking tools have revolutionized how I support my students.",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&auto=format&fit=crop&w=128&h=128&q=80",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Student",
        quote: "I love earning badges and competing with my friends. Learning has never been this fun!",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-1.2.1&auto=format&fit=crop&w=128&h=128&q=80",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How does the personalized learning work?",
        answer: "Our AI-powered system adapts to your child's learning style and pace, creating a unique learning path that evolves as they progress. It considers their strengths, challenges, and interests to provide the most effective learning experience.",
    },
    Faq {
        question: "Can I track my child's progress?",
        answer: "Yes! Parents have access to a comprehensive dashboard showing real-time progress, achievements, and areas that might need additional attention. You'll receive regular reports and can set learning goals together.",
    },
    Faq {
        question: "Is the platform accessible offline?",
        answer: "Yes, you can download lessons and activities for offline use. Progress will sync automatically when you reconnect to the internet.",
    },
    Faq {
        question: "What age groups is this suitable for?",
        answer: "Our platform is designed for learners aged 4-15, with content and difficulty levels adjusting automatically to match each student's capabilities and grade level.",
    },
];

pub const INSIGHTS: &[Insight] = &[
    Insight {
        icon: Icon::Zap,
        title: "Learning Velocity",
        description: "Your current learning speed and efficiency",
        metric: "+25% this week",
    },
    Insight {
        icon: Icon::Target,
        title: "Focus Areas",
        description: "Subjects requiring additional attention",
        metric: "Mathematics",
    },
    Insight {
        icon: Icon::BarChart,
        title: "Progress Tracking",
        description: "Overall completion rate across subjects",
        metric: "78% Complete",
    },
];

pub const WEEKLY_PROGRESS: &[ChartPoint] = &[
    ChartPoint { label: "Week 1", value: 30 },
    ChartPoint { label: "Week 2", value: 45 },
    ChartPoint { label: "Week 3", value: 65 },
    ChartPoint { label: "Week 4", value: 80 },
    ChartPoint { label: "Week 5", value: 95 },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "Problem Solving", percent: 85 },
    Skill { name: "Critical Thinking", percent: 75 },
    Skill { name: "Creative Expression", percent: 90 },
];

pub const STATS: &[Stat] = &[
    Stat { value: "1M+", label: "Active Learners" },
    Stat { value: "50K+", label: "Interactive Lessons" },
    Stat { value: "95%", label: "Student Satisfaction" },
];
