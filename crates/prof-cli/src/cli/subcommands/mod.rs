pub mod admin;
pub mod auth;
pub mod keys;
pub mod professor;
pub mod task;
pub mod university;
pub mod user;
pub mod visitor;

pub use admin::AdminCommands;
pub use auth::{AuthCommands, AuthLoginArgs};
pub use keys::KeyCommands;
pub use professor::{
    ProcessArgs, ProfessorCommands, ProfessorCreateArgs, ProfessorListArgs, ProfessorUpdateArgs,
};
pub use task::TaskCommands;
pub use university::{
    UniversityCommands, UniversityListArgs, UniversityProcessArgs, UniversitySaveArgs,
};
pub use user::{ProfileArgs, RegisterArgs, UserCommands};
pub use visitor::VisitorCommands;
