//! Career chat backed by the text generator, with canned answers when the
//! generator is unavailable.

use serde::Serialize;
use tracing::warn;

use crate::assistant::prompts::{CHAT_PROMPT_TEMPLATE, CHAT_SYSTEM};
use crate::llm_client::prompts::RUPEE_INSTRUCTION;
use crate::llm_client::TextGenerator;
use crate::matching::normalize::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Llm,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub reply: String,
    pub source: ReplySource,
}

pub async fn chat(message: &str, generator: &dyn TextGenerator) -> ChatReply {
    let prompt = CHAT_PROMPT_TEMPLATE
        .replace("{message}", message)
        .replace("{rupees}", RUPEE_INSTRUCTION);

    match generator.generate(&prompt, CHAT_SYSTEM).await {
        Ok(reply) => ChatReply {
            reply: reply.trim().to_string(),
            source: ReplySource::Llm,
        },
        Err(e) => {
            warn!("Chat generation unavailable, using fallback: {e}");
            ChatReply {
                reply: fallback_reply(message).to_string(),
                source: ReplySource::Fallback,
            }
        }
    }
}

/// Keyword-routed canned answer. Checked in order: data science, software,
/// Bangalore, then a general overview.
pub fn fallback_reply(message: &str) -> &'static str {
    let folded = normalize(message);
    let mentions = |keys: &[&str]| keys.iter().any(|k| folded.contains(k));

    if mentions(&["data scientist", "data science"]) {
        DATA_SCIENCE_REPLY
    } else if mentions(&["software", "developer", "engineer"]) {
        SOFTWARE_REPLY
    } else if mentions(&["bangalore", "bengaluru"]) {
        BANGALORE_REPLY
    } else {
        GENERAL_REPLY
    }
}

const DATA_SCIENCE_REPLY: &str = "\
Data Science is one of the fastest-growing fields in India with a projected 35% annual growth rate.

Top skills for data scientists in India include:
- Python programming
- Machine Learning algorithms
- SQL and database knowledge
- Data visualization (Tableau/Power BI)
- Statistical analysis

The salary range for data scientists in India is typically ₹6,00,000 - ₹20,00,000 for entry to mid-level positions, with senior roles commanding ₹20,00,000 - ₹40,00,000+.

Top companies hiring data scientists in India include Amazon, Microsoft, Flipkart, Mu Sigma, TCS, Wipro and IBM India.";

const SOFTWARE_REPLY: &str = "\
Software Engineering continues to be in high demand across India with a 25% annual growth rate.

The salary range for software engineers in India varies by location:
- Bangalore: ₹8,00,000 - ₹25,00,000
- Mumbai: ₹7,00,000 - ₹22,00,000
- Delhi NCR: ₹7,00,000 - ₹20,00,000
- Hyderabad: ₹7,50,000 - ₹23,00,000
- Pune: ₹6,50,000 - ₹19,00,000

Top skills in demand:
- Full-stack development
- Cloud technologies (AWS, Azure)
- React/Angular/Vue.js
- Node.js
- DevOps and CI/CD
- Microservices architecture

Major employers include TCS, Infosys, Wipro, HCL, Amazon, Microsoft, Google, and numerous startups.";

const BANGALORE_REPLY: &str = "\
Bangalore (Bengaluru) is India's tech hub with the highest concentration of tech jobs and typically offers the highest salaries in the country.

Key industries: IT services, Product development, Startups, R&D centers

Top employers in Bangalore include Amazon, Microsoft, Google, Flipkart, Infosys, Wipro, IBM, Intel and Samsung R&D.

Average tech salaries in Bangalore are 15-20% higher than other Indian cities, with software engineers earning ₹8,00,000 - ₹25,00,000 depending on experience and specialization.";

const GENERAL_REPLY: &str = "\
I'm currently operating in offline mode, so here are some general insights about the Indian job market:

- The IT sector continues to be the largest employer for skilled professionals
- Emerging fields like AI, Data Science, and Cloud Computing show 30%+ annual growth
- Bangalore, Hyderabad, and Pune are the top tech hubs with the highest salaries
- Startups are creating numerous opportunities in fintech, edtech, and healthtech
- Remote work opportunities have increased by 40% since 2020

For more specific information, please try again later.";
