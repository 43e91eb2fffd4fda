
mod config_validator_tests;
mod orchestrator_tests;
mod tracing_tests;
