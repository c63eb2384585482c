//! Keyword-routed canned responses.
//!
//! DESIGN
//! ======
//! `RULES` is an ordered table of (keywords, text) pairs. A rule matches when
//! the lowercased message contains any of its keywords as a substring, and the
//! first matching rule wins. Several keyword sets overlap ("python project",
//! "email" containing "ai", "community" containing "unit"), so declaration
//! order is part of the contract: do not reorder without updating the
//! precedence tests in `rules_test.rs`.

#[cfg(test)]
#[path = "rules_test.rs"]
mod tests;

/// Name of a canned-response rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    Journey,
    Dmrb,
    Skills,
    Python,
    Deployment,
    Projects,
    Ai,
    Contact,
    Education,
    Stack,
    Philosophy,
    Greeting,
}

/// A keyword predicate paired with the text it selects.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub topic: Topic,
    /// Lowercase substrings; any one of them triggers the rule.
    pub keywords: &'static [&'static str],
    pub text: &'static str,
}

impl Rule {
    /// Returns `true` if `lowered` contains any keyword of this rule.
    ///
    /// Callers must lowercase the message first.
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Rules in precedence order. The first match wins.
pub const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Journey,
        keywords: &["background", "story", "journey", "career", "experience", "timeline"],
        text: JOURNEY,
    },
    Rule {
        topic: Topic::Dmrb,
        keywords: &["dmrb", "make ready", "digital board", "production", "coordination", "apartment", "unit"],
        text: DMRB,
    },
    Rule {
        topic: Topic::Skills,
        keywords: &["skill", "technical", "architecture", "system thinking"],
        text: SKILLS,
    },
    Rule {
        topic: Topic::Python,
        keywords: &["python", "programming", "development", "code"],
        text: PYTHON,
    },
    Rule {
        topic: Topic::Deployment,
        keywords: &["replit", "deploy", "web", "no-code"],
        text: DEPLOYMENT,
    },
    Rule {
        topic: Topic::Projects,
        keywords: &["project", "tools", "system pilot", "blueprint", "portfolio", "built", "developed"],
        text: PROJECTS,
    },
    Rule {
        topic: Topic::Ai,
        keywords: &["ai", "automation", "gpt", "prompt"],
        text: AI,
    },
    Rule {
        topic: Topic::Contact,
        keywords: &["contact", "email", "reach"],
        text: CONTACT,
    },
    Rule {
        topic: Topic::Education,
        keywords: &["education", "university", "degree", "certification"],
        text: EDUCATION,
    },
    Rule {
        topic: Topic::Stack,
        keywords: &["langchain", "fastapi", "supabase", "sqlite"],
        text: STACK,
    },
    Rule {
        topic: Topic::Philosophy,
        keywords: &["philosophy", "approach", "methodology", "thinking"],
        text: PHILOSOPHY,
    },
    Rule {
        topic: Topic::Greeting,
        keywords: &["hello", "hi", "hey", "greeting"],
        text: GREETING,
    },
];

/// Return the rule that fires for `message`, if any.
#[must_use]
pub fn matching_rule(message: &str) -> Option<&'static Rule> {
    let lowered = message.to_lowercase();
    for rule in RULES {
        if rule.matches(&lowered) {
            return Some(rule);
        }
    }
    None
}

/// Return the topic of the rule that fires for `message`, or `None` when the
/// overview fallback would be used.
#[must_use]
pub fn classify(message: &str) -> Option<Topic> {
    matching_rule(message).map(|rule| rule.topic)
}

/// Select the canned reply for `message`. Never fails: unmatched input gets
/// the overview text.
#[must_use]
pub fn select_response(message: &str) -> &'static str {
    matching_rule(message).map_or(OVERVIEW, |rule| rule.text)
}

/// All canned texts followed by the overview, separated by blank lines.
///
/// Used as grounding context for the LLM-backed endpoint.
#[must_use]
pub fn knowledge_base() -> String {
    RULES
        .iter()
        .map(|rule| rule.text)
        .chain(std::iter::once(OVERVIEW))
        .collect::<Vec<_>>()
        .join("\n\n")
}

// =============================================================================
// RESPONSE TEXTS
// =============================================================================

pub const JOURNEY: &str = "**Miguel's Professional Journey:**

**🎬 Universal Studios (Origins)**: Started in entertainment operations, learning systems thinking through complex operational challenges

**🏢 Mid-Atlantic Apartment Communities (MAA)**: Service Maintenance Manager leading 3+ properties, where he identified operational inefficiencies and began developing digital solutions

**🏗️ RPM Living**: Technology integration roles focusing on process optimization and digital transformation

**🤖 Current - Independent AI Systems Developer**: Self-driven transition into AI systems development, building production tools without formal software titles

**Key Transition Points:**
- Recognized that operational problems needed systematic, not manual solutions
- Started building Python tools to solve real workplace challenges
- Developed DMRB coordination engine that achieved 40% efficiency improvements
- Evolved from operations manager to systems architect through hands-on problem solving

Miguel's unique path combines deep operational knowledge with self-taught technical skills, making him uniquely positioned to build AI systems that actually solve business problems.";

pub const DMRB: &str = "**DMRB (Make Ready Digital Board) - Technical Deep Dive:**

**🏗️ System Architecture:**
- **Frontend**: PySide6 GUI with clean separation from business logic
- **Backend**: Python with SQLite database and Pandas for data processing
- **Architecture**: DTO patterns, lifecycle state management, real-time updates
- **Deployment**: Multi-property production environment

**⚙️ Core Features:**
- **Automated Workflow Enforcement**: Task dependencies and resource allocation
- **Lifecycle Logic**: State transitions with validation and rollback capabilities
- **Real-time Coordination**: Live updates across teams and properties
- **Role-based Access**: Different views for maintenance, management, and admin
- **Compliance Checking**: Automated validation of regulatory requirements

**📊 Business Impact:**
- **40% reduction** in unit turnover time
- **Eliminated double-booking conflicts** through intelligent scheduling
- **Replaced Excel chaos** with structured, auditable workflows
- **Deployed across multiple properties** with measurable ROI

**🚀 Technical Innovation:**
Miguel built this without formal software training, using operations expertise to design workflows that actually match how teams work in practice. The system bridges the gap between business needs and technical implementation.";

pub const SKILLS: &str = "Miguel is highly skilled in system thinking, process automation, prompt engineering, and AI-driven coordination tools. He approaches problems like a software architect: separating UI from logic, using clean architecture, and applying DTO structures to keep logic traceable and auditable. His technical stack includes GPT-4, LangChain, Python (Pandas, PySide6, FastAPI), SQLite, and Supabase.";

pub const PYTHON: &str = "Miguel uses Python to build intelligent tools, dashboards, and UI-based systems — even without writing raw frontend code. He specializes in GUI development with PySide6 and Tkinter, creating full-scale coordination engines with clean separation between UI and business logic. His approach focuses on making complex systems traceable and auditable.";

pub const DEPLOYMENT: &str = "Miguel uses Replit to build and deploy web-based tools, even though he doesn't code HTML/JS from scratch. He assembles, structures, and deploys full projects using no-code/low-code workflows, smart design choices, and AI-assisted coding. This approach lets him focus on solving business problems rather than getting bogged down in frontend implementation details.";

pub const PROJECTS: &str = "**Miguel's Technical Project Portfolio:**

**🏗️ DMRB (Make Ready Digital Board)**
- **Type**: Full-scale Python coordination engine
- **Technology**: PySide6, SQLite, Pandas, lifecycle state management
- **Impact**: 40% efficiency gain, deployed across multiple properties
- **Innovation**: Replaced Excel chaos with structured workflows

**🤖 System Pilot**
- **Type**: GPT-powered software architecture strategist
- **Technology**: GPT-4, LangChain, prompt chaining, AI analysis
- **Purpose**: Code review, architecture recommendations, best practices
- **Unique Angle**: Combines operational experience with AI insights

**🔧 Blueprint Buddy**
- **Type**: Advanced prompt engineering optimization platform
- **Technology**: Python, FastAPI, OpenAI integration, A/B testing
- **Features**: Systematic prompt refinement, quality metrics, iterative improvement
- **Applications**: AI agent development, chatbot optimization

**🐍 Python Training Board**
- **Type**: Interactive GUI-based learning management system
- **Technology**: PySide6, modular architecture, plugin system
- **Approach**: Hands-on exercises, real-time feedback, progressive difficulty
- **Focus**: Bridge theory-to-practice gap in Python education

**🌐 Portfolio Website (This Site)**
- **Type**: Full-stack web application with AI chatbot
- **Technology**: HTML/CSS/JS frontend, Node.js backend, PostgreSQL
- **Features**: Intelligent chatbot, analytics, contact management
- **Deployment**: Dual compatibility (Replit + GitHub Pages)

All projects are production-deployed and solving real problems, not just demos.";

pub const AI: &str = "Miguel specializes in AI-driven coordination tools and prompt engineering. His tools use GPT-4 and LangChain to create intelligent automation systems that solve real operational problems. He focuses on practical AI implementations that reduce delays, eliminate manual processes, and introduce logical enforcement to business workflows.";

pub const CONTACT: &str = "You can reach Miguel at:\n📧 mgonzalez869@gmail.com\n📍 Based in Plano, TX\n💼 LinkedIn: linkedin.com/in/miguel-gonzalez-8a389791\n🔗 GitHub: github.com/mga210";

pub const EDUCATION: &str = "Miguel is currently pursuing a BBA in Computer Information Systems at Ana G. Méndez University. He also holds certifications in Google Project Management, Python for Everybody (University of Michigan), and EPA Section 608. His learning approach combines formal education with hands-on project development and AI-assisted skill building.";

pub const STACK: &str = "Miguel's technical stack includes:\n• **LangChain** - For building AI agent workflows and prompt chains\n• **FastAPI** - For creating high-performance API backends\n• **SQLite & Supabase** - For local and cloud database solutions\n• **PySide6/Tkinter** - For Python GUI development\n• **Pandas** - For data manipulation and analysis\n\nHe integrates these tools to build coordination engines and intelligent automation systems.";

pub const PHILOSOPHY: &str = "Miguel's development philosophy centers on solving real operational problems through clean architecture. He believes in separating UI from business logic, using DTO patterns for data transfer, and building systems that are traceable and auditable. His approach: identify the core problem, architect a modular solution, implement with clean code, and deploy for real-world testing.";

pub const GREETING: &str = "Hello! I'm Miguel's intelligent assistant with deep knowledge of his technical journey, projects, and expertise. I can discuss his real-world AI tools, Python coordination systems, architectural approaches, and his evolution from operations to self-driven software development. What would you like to explore?";

/// Reply used when no rule matches.
pub const OVERVIEW: &str = "I can help with any aspect of Miguel's profile! Here are some key areas:

**🚀 Technical Projects**: DMRB coordination engine (40% efficiency gain), System Pilot AI assistant, Blueprint Buddy prompt optimizer, Python Training Board

**🛠️ Technical Skills**: Python (PySide6, Tkinter, Pandas, FastAPI), AI/LLM integration (GPT-4, LangChain), database design (SQLite, Supabase), clean architecture patterns

**📈 Professional Journey**: Universal Studios → MAA Properties → RPM Living → Independent AI Developer. Led 50+ team training, $25K+ cost savings, operations-to-tech transition

**🎯 Current Focus**: AI-driven operational intelligence, no-code/low-code deployment on Replit, system architecture consulting

**🎓 Education**: BBA Computer Information Systems (Ana G. Méndez), Google PM certification, Python specialization

What specific area would you like to explore in detail?";
