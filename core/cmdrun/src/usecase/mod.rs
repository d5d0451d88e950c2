pub(crate) mod run_command;

pub(crate) use run_command::RunCommandUseCase;
