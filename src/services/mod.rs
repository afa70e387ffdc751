pub mod answer_scorer;
pub mod model_client;
pub mod prompt_builder;
pub mod quiz_validator;
pub mod response_extractor;
