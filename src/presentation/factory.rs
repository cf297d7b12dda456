//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::CompileUseCase;
use crate::config::Config;
use crate::domain::ports::Preprocessor;
use crate::domain::services::PreprocessDecisionEngine;
use crate::infrastructure::{
    locate_compiler, CommandPreprocessor, DisabledPreprocessor, LocalSourceTree, ProcessCompiler,
};

/// Type alias for the concrete CompileUseCase with all dependencies
pub type ConcreteCompileUseCase =
    CompileUseCase<ProcessCompiler, Box<dyn Preprocessor>, LocalSourceTree>;

/// Create a compile use case with all dependencies wired up
pub fn create_compile_use_case(config: &Config) -> ConcreteCompileUseCase {
    CompileUseCase::new(
        create_compiler(config),
        create_preprocessor(config),
        LocalSourceTree::new(&config.paths.quest_root),
        create_decision_engine(config),
    )
}

/// Resolve the compiler binary and wrap it in a runner
pub fn create_compiler(config: &Config) -> ProcessCompiler {
    let root = &config.paths.quest_root;
    let program = locate_compiler(&config.compiler.command, &config.compiler.fallbacks, root);
    tracing::info!(compiler = %program.display(), "resolved compiler");

    ProcessCompiler::new(program, root, config.timeout()).with_args(config.compiler.args.clone())
}

/// Decision engine over the configured strategy and known-file list
pub fn create_decision_engine(config: &Config) -> PreprocessDecisionEngine {
    PreprocessDecisionEngine::new(
        config.preprocess.strategy,
        config.preprocess.known_files.iter().cloned(),
        config.paths.preprocessed_dir.clone(),
    )
}

/// External preprocessor, or a disabled stand-in when no command is configured
pub fn create_preprocessor(config: &Config) -> Box<dyn Preprocessor> {
    match CommandPreprocessor::new(
        config.preprocess.command.clone(),
        &config.paths.quest_root,
        &config.paths.preprocessed_dir,
        config.timeout(),
    ) {
        Some(preprocessor) => Box::new(preprocessor),
        None => Box::new(DisabledPreprocessor),
    }
}
