pub mod daily_notice;
