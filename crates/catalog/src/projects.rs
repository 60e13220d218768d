use shared::domain::{Category, ProjectId, ProjectStatus, Subcategory};

use crate::Project;

struct Entry {
    id: u32,
    title: &'static str,
    description: &'static str,
    long_description: &'static str,
    image: Option<&'static str>,
    category: Category,
    subcategory: Option<Subcategory>,
    technologies: &'static [&'static str],
    features: &'static [&'static str],
    live_url: Option<&'static str>,
    github_url: &'static str,
    status: ProjectStatus,
}

impl From<&Entry> for Project {
    fn from(entry: &Entry) -> Self {
        Project {
            id: ProjectId(entry.id),
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            long_description: entry.long_description.to_string(),
            image: entry.image.map(str::to_string),
            category: entry.category,
            subcategory: entry.subcategory,
            technologies: entry.technologies.iter().map(|t| t.to_string()).collect(),
            features: entry.features.iter().map(|f| f.to_string()).collect(),
            live_url: entry.live_url.map(str::to_string),
            github_url: entry.github_url.to_string(),
            status: entry.status,
        }
    }
}

const SHOWCASE: &[Entry] = &[
    Entry {
        id: 1,
        title: "E-Commerce Dashboard",
        description: "A modern e-commerce analytics dashboard with interactive charts, sales insights, and dynamic filtering.",
        long_description: "Developed a comprehensive e-commerce sales dashboard to visualize sales, profit, and customer data. Features include interactive bar and pie charts, top states and customers by profit, and dynamic filtering by quarter and city. Built for actionable business intelligence.",
        image: Some("/veenayak_sirohi/E-Commerce_Dashboard.png"),
        category: Category::DataAnalytics,
        subcategory: Some(Subcategory::DataAnalytics),
        technologies: &["Power BI", "DAX", "Data Visualization", "Business Analytics"],
        features: &[
            "Interactive sales and profit charts",
            "Top states and customers by profit",
            "Dynamic filtering by quarter and city",
            "Category and payment mode breakdowns",
            "Responsive dashboard layout",
            "Business intelligence insights",
        ],
        live_url: None,
        github_url: "https://github.com/veenayaksirohi/E-Commerse_Dashboard",
        status: ProjectStatus::Completed,
    },
    Entry {
        id: 2,
        title: "H.R. Analytics Dashboard",
        description: "An HR analytics dashboard for visualizing employee attrition, demographics, and workforce trends.",
        long_description: "Created an HR analytics dashboard to analyze employee attrition, salary, education, and job roles. The dashboard features interactive visualizations for gender, age group, education field, and attrition by department, providing actionable insights for HR decision-making.",
        image: Some("/veenayak_sirohi/H.R._Analytics.png"),
        category: Category::DataAnalytics,
        subcategory: Some(Subcategory::DataAnalytics),
        technologies: &["Power BI", "DAX", "Data Visualization", "HR Analytics"],
        features: &[
            "Attrition analysis by multiple factors",
            "Interactive bar and pie charts",
            "Salary and job role breakdowns",
            "Gender and age group insights",
            "Responsive and accessible design",
            "Workforce trend visualization",
        ],
        live_url: None,
        github_url: "https://github.com/veenayaksirohi/H.R_Analytics",
        status: ProjectStatus::Completed,
    },
    Entry {
        id: 3,
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with payment integration, inventory management, and admin dashboard.",
        long_description: "Built a comprehensive e-commerce platform from scratch using Next.js and Node.js. Features include user authentication, product catalog, shopping cart, payment processing with Stripe, order management, and an admin dashboard for inventory and sales analytics.",
        image: None,
        category: Category::Fullstack,
        subcategory: None,
        technologies: &["Next.js", "Node.js", "PostgreSQL", "Stripe", "Tailwind CSS"],
        features: &[
            "User authentication and authorization",
            "Product catalog with search and filtering",
            "Shopping cart and checkout process",
            "Payment integration with Stripe",
            "Order tracking and management",
            "Admin dashboard with analytics",
        ],
        live_url: Some("https://ecommerce-demo.vercel.app"),
        github_url: "https://github.com/username/ecommerce-platform",
        status: ProjectStatus::Completed,
    },
    Entry {
        id: 4,
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates and team collaboration features.",
        long_description: "Developed a modern task management application similar to Trello/Asana. The app features drag-and-drop functionality, real-time collaboration, team management, and progress tracking with beautiful data visualizations.",
        image: None,
        category: Category::Frontend,
        subcategory: None,
        technologies: &["React", "TypeScript", "Socket.io", "MongoDB", "Express"],
        features: &[
            "Drag and drop task management",
            "Real-time collaboration",
            "Team and project management",
            "Progress tracking and analytics",
            "File attachments and comments",
            "Mobile responsive design",
        ],
        live_url: Some("https://taskmanager-demo.vercel.app"),
        github_url: "https://github.com/username/task-manager",
        status: ProjectStatus::Completed,
    },
    Entry {
        id: 5,
        title: "Weather Dashboard",
        description: "A responsive weather application with location-based forecasts and interactive maps.",
        long_description: "Created a comprehensive weather dashboard that provides current weather conditions, 7-day forecasts, and interactive weather maps. The app uses geolocation API and integrates with multiple weather services for accurate data.",
        image: None,
        category: Category::Frontend,
        subcategory: None,
        technologies: &["Vue.js", "JavaScript", "Weather API", "Mapbox", "Chart.js"],
        features: &[
            "Current weather conditions",
            "7-day weather forecast",
            "Interactive weather maps",
            "Location-based services",
            "Weather alerts and notifications",
            "Historical weather data",
        ],
        live_url: Some("https://weather-dashboard-demo.vercel.app"),
        github_url: "https://github.com/username/weather-dashboard",
        status: ProjectStatus::Completed,
    },
    Entry {
        id: 6,
        title: "Social Media API",
        description: "A RESTful API for a social media platform with authentication, posts, and real-time messaging.",
        long_description: "Built a scalable REST API for a social media platform. The API handles user authentication, post creation and management, friend connections, real-time messaging, and content moderation with comprehensive documentation.",
        image: None,
        category: Category::Backend,
        subcategory: None,
        technologies: &["Node.js", "Express", "MongoDB", "JWT", "Socket.io"],
        features: &[
            "User authentication with JWT",
            "CRUD operations for posts",
            "Friend/follower system",
            "Real-time messaging",
            "Content moderation",
            "API documentation with Swagger",
        ],
        live_url: Some("https://social-api-docs.vercel.app"),
        github_url: "https://github.com/username/social-media-api",
        status: ProjectStatus::Completed,
    },
    Entry {
        id: 7,
        title: "Portfolio Website",
        description: "A modern, responsive portfolio website built with Next.js and deployed on Vercel.",
        long_description: "Designed and developed this portfolio website to showcase my projects and skills. Features include smooth animations, responsive design, contact form integration, and optimized performance for fast loading times.",
        image: None,
        category: Category::Frontend,
        subcategory: None,
        technologies: &["Next.js", "TypeScript", "Tailwind CSS", "Framer Motion"],
        features: &[
            "Responsive design",
            "Smooth animations",
            "Contact form integration",
            "SEO optimization",
            "Fast loading performance",
            "Dark/light theme support",
        ],
        live_url: Some("https://portfolio-demo.vercel.app"),
        github_url: "https://github.com/username/portfolio",
        status: ProjectStatus::Completed,
    },
    Entry {
        id: 8,
        title: "AI Chat Application",
        description: "An AI-powered chat application with natural language processing and conversation memory.",
        long_description: "Currently developing an AI chat application that uses OpenAI's GPT API for natural language processing. The app features conversation memory, context awareness, and multiple AI personalities for different use cases.",
        image: None,
        category: Category::Fullstack,
        subcategory: None,
        technologies: &["Next.js", "OpenAI API", "PostgreSQL", "Prisma", "WebSocket"],
        features: &[
            "AI-powered conversations",
            "Conversation memory",
            "Multiple AI personalities",
            "Real-time messaging",
            "User authentication",
            "Chat history and export",
        ],
        live_url: None,
        github_url: "https://github.com/username/ai-chat-app",
        status: ProjectStatus::InProgress,
    },
];

/// The showcase in declaration order.
pub fn showcase() -> Vec<Project> {
    SHOWCASE.iter().map(Project::from).collect()
}
