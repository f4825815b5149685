//! Landing page: FAQ sidebar, upload form and an optional error banner.

use minijinja::context;
use serde::Serialize;

use crate::errors::AppError;
use crate::render::templates::render;

pub const APP_TITLE: &str = "AI Resume Screening & Ranking System";

#[derive(Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Q1: How do I upload my resume?",
        answer: "A: Click on the 'Upload Resumes' button and select your PDF files.",
    },
    Faq {
        question: "Q2: What file formats are supported?",
        answer: "A: Currently, only PDF files are supported.",
    },
    Faq {
        question: "Q3: How is the matching score calculated?",
        answer: "A: The matching score is calculated using TF-IDF vectorization and cosine similarity.",
    },
    Faq {
        question: "Q4: Can I upload multiple resumes?",
        answer: "A: Yes, you can upload multiple PDF files at once.",
    },
    Faq {
        question: "Q5: How do I download the ranking report?",
        answer: "A: After the resumes are ranked, click on the 'Download Ranking Report' button to download the CSV file.",
    },
];

/// The landing page. `job_description` is echoed back so a failed submit
/// keeps it.
pub fn index_page(job_description: &str, error: Option<&str>) -> Result<String, AppError> {
    render("index.html", context! { job_description, error })
}
