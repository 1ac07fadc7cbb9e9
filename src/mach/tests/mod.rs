mod register_test;
mod stack_test;
