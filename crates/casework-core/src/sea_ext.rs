use sea_orm::{
    ColumnTrait, EntityTrait, Order, QueryOrder, Select,
    sea_query::{IntoColumnRef, NullOrdering, OrderedStatement},
};

/// Newest-first ordering that keeps rows without a value at the end.
///
/// Plain `ORDER BY col DESC` puts NULLs first on PostgreSQL.
pub trait OrderNewestFirst {
    fn order_newest_first<C>(self, col: C) -> Self
    where
        C: ColumnTrait + IntoColumnRef;
}

impl<E> OrderNewestFirst for Select<E>
where
    E: EntityTrait,
{
    fn order_newest_first<C>(mut self, col: C) -> Self
    where
        C: ColumnTrait + IntoColumnRef,
    {
        QueryOrder::query(&mut self).order_by_with_nulls(col, Order::Desc, NullOrdering::Last);
        self
    }
}
