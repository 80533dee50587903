mod builder;
mod concurrency;
mod fixtures;
mod flatten;
mod render;
mod scenario;
