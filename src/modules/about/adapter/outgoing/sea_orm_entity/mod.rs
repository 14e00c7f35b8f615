pub mod about_me;
