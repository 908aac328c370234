// Career advisor: profile → recommendation, and resume → profile.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod handlers;
pub mod prompts;
pub mod recommender;
pub mod scanner;
