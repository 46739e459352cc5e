mod recent_orders;

pub use recent_orders::RecentOrders;
