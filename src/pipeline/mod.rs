pub mod stage1_filter;
pub mod stage2_aggregate;
pub mod stage3_recommend;
pub mod stage4_charts;
pub mod stage5_report;
