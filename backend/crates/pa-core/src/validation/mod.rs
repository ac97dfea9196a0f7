pub mod name_validator;
