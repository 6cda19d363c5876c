pub mod a001_alumni;
pub mod a002_business;
pub mod a003_educator;
pub mod a004_event;
pub mod a005_article;
pub mod a006_opportunity;
