mod formatter_tests;
mod inspect_tests;
