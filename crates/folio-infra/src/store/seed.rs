//! Sample posts loaded into the store at startup.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use folio_core::domain::{Category, Post, estimate_read_time, normalize_tags};

const AUTHOR: &str = "John Doe";

struct Seed {
    title: &'static str,
    slug: &'static str,
    excerpt: &'static str,
    content: &'static str,
    image_url: &'static str,
    category: Category,
    tags: &'static [&'static str],
    published_at: (i32, u32, u32, u32, u32),
    featured: bool,
    published: bool,
    meta_description: Option<&'static str>,
    meta_keywords: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        title: "Building Scalable Data Pipelines with Apache Spark and Airflow",
        slug: "building-scalable-data-pipelines-spark-airflow",
        excerpt: "Architecting batch pipelines that stay reliable as data volume grows, \
                  with Spark for processing and Airflow for orchestration.",
        content: "# Building Scalable Data Pipelines\n\n\
                  Reliable pipelines start with clear boundaries between ingestion, \
                  transformation and delivery.\n\n\
                  ## Processing with Spark\n\n\
                  Partition early, keep transformations pure and let the engine \
                  recover failed stages.\n\n\
                  ## Orchestrating with Airflow\n\n\
                  Model every step as a task with retries, and keep DAGs small \
                  enough to reason about.\n\n\
                  Design for failure, monitor everything and document the workflow.",
        image_url: "https://images.pexels.com/photos/1181671/pexels-photo-1181671.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: Category::Technology,
        tags: &["Apache Spark", "Airflow", "Data Engineering", "Big Data"],
        published_at: (2024, 1, 15, 10, 0),
        featured: true,
        published: true,
        meta_description: Some(
            "Learn how to build scalable data pipelines using Apache Spark and Airflow.",
        ),
        meta_keywords: &["apache spark", "airflow", "data pipelines", "data engineering"],
    },
    Seed {
        title: "Machine Learning in Production: From Model to Deployment",
        slug: "machine-learning-production-model-deployment",
        excerpt: "What changes when a model leaves the notebook: serving, monitoring \
                  and retraining at scale.",
        content: "# Machine Learning in Production\n\n\
                  Training a model is the easy part. Serving it is where the work is.\n\n\
                  ## The pipeline\n\n\
                  Data validation, feature engineering, versioned models and a \
                  serving layer with rollback.\n\n\
                  ## Monitoring\n\n\
                  Track drift, latency and accuracy, and automate retraining triggers.",
        image_url: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: Category::Technology,
        tags: &["Machine Learning", "MLOps", "Production", "Deployment"],
        published_at: (2024, 1, 10, 14, 30),
        featured: false,
        published: true,
        meta_description: Some(
            "A guide to deploying machine learning models in production.",
        ),
        meta_keywords: &["machine learning", "mlops", "model deployment"],
    },
    Seed {
        title: "Building LLM Applications with LangChain and LangGraph",
        slug: "building-llm-applications-langchain-langgraph",
        excerpt: "Composing language-model calls into stateful workflows for data \
                  analysis and insight generation.",
        content: "# Building LLM Applications\n\n\
                  Chains turn single prompts into repeatable steps; graphs add state \
                  and branching.\n\n\
                  ## Practical concerns\n\n\
                  Manage context windows, handle failures gracefully and watch token \
                  costs.",
        image_url: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: Category::Tutorials,
        tags: &["LLM", "LangChain", "LangGraph", "AI", "Data Analysis"],
        published_at: (2024, 1, 5, 9, 15),
        featured: true,
        published: true,
        meta_description: None,
        meta_keywords: &["langchain", "langgraph", "llm"],
    },
    Seed {
        title: "Notes on Growing from Senior to Staff Engineer",
        slug: "notes-senior-to-staff-engineer",
        excerpt: "Draft: what actually changed in scope, influence and day-to-day work.",
        content: "Work in progress.",
        image_url: "",
        category: Category::Career,
        tags: &["Career", "Leadership"],
        published_at: (2024, 2, 1, 8, 0),
        featured: false,
        published: false,
        meta_description: None,
        meta_keywords: &[],
    },
];

/// Build the seed set. Each call assigns fresh ids.
pub fn seed_posts() -> Vec<Post> {
    SEEDS.iter().map(Seed::to_post).collect()
}

impl Seed {
    fn to_post(&self) -> Post {
        let (year, month, day, hour, minute) = self.published_at;

        Post {
            id: Uuid::now_v7(),
            title: self.title.to_string(),
            slug: self.slug.to_string(),
            excerpt: self.excerpt.to_string(),
            content: self.content.to_string(),
            image_url: self.image_url.to_string(),
            category: self.category,
            tags: normalize_tags(self.tags),
            author: AUTHOR.to_string(),
            published_at: utc(year, month, day, hour, minute),
            updated_at: None,
            read_time: estimate_read_time(self.content),
            featured: self.featured,
            published: self.published,
            meta_description: self.meta_description.map(str::to_string),
            meta_keywords: (!self.meta_keywords.is_empty())
                .then(|| normalize_tags(self.meta_keywords)),
            views: None,
        }
    }
}

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_else(Utc::now)
}
