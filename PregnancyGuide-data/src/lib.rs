// PregnancyGuide Data
// This crate handles static data access and external service interactions

// Static table loading from CSV
pub mod tables;

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;

// Clients for the LLM, web search and video search services
pub mod clients;
