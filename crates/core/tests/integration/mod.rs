mod generate;
mod indexed;
mod join;
