//! Static copy rendered by the site. Records are built once from literals
//! and never mutated; ids only exist for lookup.

use serde::Serialize;

use crate::{Result, SiteError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Programme {
    pub id: u32,
    pub title: &'static str,
    pub tag: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

const IMG: &str = "https://images.unsplash.com";

static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "How We're Solving Africa's Tech Talent Gap",
        excerpt: "After training over 15,000 students across Africa, we realized the gap isn't just about skills. It's about trust, structure, and support.",
        image: IMG,
        date: "November 15, 2025",
        read_time: "5 min read",
    },
    BlogPost {
        id: 2,
        title: "Empowering 2,000 Women to Lead Africa's Tech Revolution",
        excerpt: "This stems from a barrier to innovation, economic growth, and the full realization of Africa's digital potential.",
        image: IMG,
        date: "November 14, 2025",
        read_time: "3 min read",
    },
    BlogPost {
        id: 3,
        title: "I Almost Gave Up on Tech Before I Started",
        excerpt: "Most training programs teach you to code. We teach you to become a builder.",
        image: IMG,
        date: "November 13, 2025",
        read_time: "4 min read",
    },
    BlogPost {
        id: 4,
        title: "The Day I Stopped Fighting With ChatGPT",
        excerpt: "I'd type something vague like \"make a login system\" and get code that was either wrong or far too complicated.",
        image: IMG,
        date: "November 13, 2025",
        read_time: "2 min read",
    },
    BlogPost {
        id: 5,
        title: "Get Ready for Cohort 5.0",
        excerpt: "Cohort 5.0 is officially launching this June 2025 after the success of our previous cohorts.",
        image: IMG,
        date: "April 10, 2025",
        read_time: "1 min read",
    },
    BlogPost {
        id: 6,
        title: "Hearty Cheers To Our Beneficiaries!",
        excerpt: "Congratulations to everyone who just completed the Cohort 3.0 Batch B training.",
        image: IMG,
        date: "March 23, 2025",
        read_time: "1 min read",
    },
];

static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        text: "ShiftUp Africa gave me the clarity I needed to navigate my career path. The 100-day journey was truly transformational for my mindset.",
        author: "Mr. John Doe",
        role: "CHARITY RECIPIENT",
        avatar: IMG,
    },
    Testimonial {
        id: 2,
        text: "The community support and mentorship provided are world-class. I feel more confident in my professional abilities than ever before.",
        author: "Jane Smith",
        role: "PROGRAMME GRADUATE",
        avatar: IMG,
    },
    Testimonial {
        id: 3,
        text: "The execution-focused approach helped me secure my dream job within months of graduating.",
        author: "Michael Obi",
        role: "ALUMNI",
        avatar: IMG,
    },
    Testimonial {
        id: 4,
        text: "Bridging the gap between school and work is a challenge ShiftUp Africa solves perfectly. The workplace readiness modules are invaluable.",
        author: "Sarah Ahmed",
        role: "TRAINEE",
        avatar: IMG,
    },
    Testimonial {
        id: 5,
        text: "Empowering young Africans with the right tools is the mission, and they are doing it exceptionally well.",
        author: "David Mensah",
        role: "COMMUNITY MEMBER",
        avatar: IMG,
    },
    Testimonial {
        id: 6,
        text: "The mentorship I received was pivotal. It was about building the character required for leadership, not just technical skills.",
        author: "Chioma Okoro",
        role: "SUCCESS STORY",
        avatar: IMG,
    },
];

static PROGRAMMES: &[Programme] = &[
    Programme {
        id: 1,
        title: "SUA Graduate Launchpad",
        tag: "100-DAY JOURNEY",
        subtitle: "Clarity. Confidence. Competence.",
        image: IMG,
        features: &["Mindset Mastery", "Workplace Readiness", "Career Clarity"],
    },
    Programme {
        id: 2,
        title: "Graduate Performance Accelerator",
        tag: "BEHAVIOURAL ACTIVATION",
        subtitle: "Upgrade how you think, act, and perform.",
        image: IMG,
        features: &[
            "Leadership Skills",
            "High-Performance Habit",
            "Strategic Execution",
        ],
    },
    Programme {
        id: 3,
        title: "Agility to Result",
        tag: "PRACTICAL EXECUTION",
        subtitle: "Execute fast. Deliver well. Work smart.",
        image: IMG,
        features: &["Agile Frameworks", "Sprint Planning", "Priority Management"],
    },
    Programme {
        id: 4,
        title: "Speak to Lead",
        tag: "COMMUNICATION MASTERY",
        subtitle: "Communicate with clarity. Present with confidence.",
        image: IMG,
        features: &[
            "Public Speaking",
            "Persuasive Storytelling",
            "Presence & Poise",
        ],
    },
];

static FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Who is this program specifically designed for?",
        answer: "Ambitious young African graduates, recent or within 3 years of graduating, who want a competitive edge in the global marketplace.",
    },
    FaqEntry {
        question: "Is there a specific technical background required?",
        answer: "No. The core Graduate Launchpad is industry-agnostic and focuses on critical thinking, agile execution, and workplace readiness.",
    },
    FaqEntry {
        question: "How does the mentorship component work?",
        answer: "You are paired with industry veterans who provide 1-on-1 guidance, portfolio reviews, and exposure to professional networks.",
    },
    FaqEntry {
        question: "What is the hybrid commitment like?",
        answer: "We recommend 10-12 hours per week covering live sessions, asynchronous modules, and team-based execution sprints.",
    },
    FaqEntry {
        question: "How do you handle post-program support?",
        answer: "Alumni keep lifetime access to the network, exclusive job boards, and ongoing professional development workshops.",
    },
];

static TEAM: &[TeamMember] = &[TeamMember {
    name: "Ibijoke Oyewole",
    role: "Convener",
}];

/// Read-only access to every static record the site renders.
#[derive(Debug, Clone, Copy)]
pub struct ContentCatalog {
    blog_posts: &'static [BlogPost],
    testimonials: &'static [Testimonial],
    programmes: &'static [Programme],
    faqs: &'static [FaqEntry],
    team: &'static [TeamMember],
}

impl ContentCatalog {
    pub fn shiftup() -> Self {
        Self {
            blog_posts: BLOG_POSTS,
            testimonials: TESTIMONIALS,
            programmes: PROGRAMMES,
            faqs: FAQS,
            team: TEAM,
        }
    }

    pub fn blog_posts(&self) -> &'static [BlogPost] {
        self.blog_posts
    }

    pub fn post(&self, id: u32) -> Result<&'static BlogPost> {
        self.blog_posts
            .iter()
            .find(|post| post.id == id)
            .ok_or(SiteError::UnknownContent {
                kind: "blog post",
                id,
            })
    }

    /// Up to `limit` other posts in catalog order, shown beside an article.
    pub fn related_posts(&self, id: u32, limit: usize) -> Vec<&'static BlogPost> {
        self.blog_posts
            .iter()
            .filter(|post| post.id != id)
            .take(limit)
            .collect()
    }

    pub fn featured_post(&self) -> Option<&'static BlogPost> {
        self.blog_posts.first()
    }

    /// Every post except the featured one.
    pub fn archive(&self) -> &'static [BlogPost] {
        self.blog_posts.get(1..).unwrap_or_default()
    }

    pub fn testimonials(&self) -> &'static [Testimonial] {
        self.testimonials
    }

    pub fn programmes(&self) -> &'static [Programme] {
        self.programmes
    }

    pub fn programme(&self, id: u32) -> Result<&'static Programme> {
        self.programmes
            .iter()
            .find(|programme| programme.id == id)
            .ok_or(SiteError::UnknownContent {
                kind: "programme",
                id,
            })
    }

    pub fn faqs(&self) -> &'static [FaqEntry] {
        self.faqs
    }

    pub fn team(&self) -> &'static [TeamMember] {
        self.team
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::shiftup()
    }
}
