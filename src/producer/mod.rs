pub mod alert_producer;
