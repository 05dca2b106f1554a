use std::sync::Arc;

use chrono::{Duration, Utc};
use domain_order::{
    exception::OrderException,
    mock::{MockOrderRepo, MockSpecificationRepo},
    model::{
        entity::{Order, RamClass},
        vo::{CandidateOrder, Capacity, Catalog, PricingConfig, UserInfo},
    },
    service::{OrderService, SpecificationService},
};
use rust_decimal::Decimal;
use service_order::{OrderServiceImpl, SpecificationServiceImpl};
use uuid::Uuid;

fn pricing() -> PricingConfig {
    PricingConfig {
        storage_price_per_tb: Decimal::from(10),
        transfer_limit_1: 10,
        transfer_limit_2: 1000,
        transfer_cost_1: Decimal::ONE,
        transfer_rate_base: Decimal::new(10, 2),
        transfer_factor2: Decimal::new(8, 1),
        transfer_factor3: Decimal::new(5, 1),
        min_order_transfer: 10,
    }
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        RamClass {
            id: 1,
            label: "16 GB RAM".to_owned(),
            fee: Decimal::from(10),
            min_storage_tb: 1,
        },
        RamClass {
            id: 2,
            label: "32 GB RAM".to_owned(),
            fee: Decimal::from(20),
            min_storage_tb: 10,
        },
    ])
}

fn specification_repo() -> MockSpecificationRepo {
    let mut repo = MockSpecificationRepo::new();
    repo.expect_get_pricing_config().returning(|| Ok(pricing()));
    repo.expect_get_catalog().returning(|| Ok(catalog()));
    repo.expect_get_capacity().returning(|| {
        Ok(Capacity {
            max_active_instances: 6,
            max_total_storage: 100,
        })
    });
    repo
}

fn user(totp_verified: bool) -> UserInfo {
    UserInfo {
        id: Uuid::new_v4(),
        name: "testuser".to_owned(),
        totp_verified,
    }
}

fn order_service(order_repo: MockOrderRepo) -> OrderServiceImpl {
    OrderServiceImpl::builder()
        .order_repo(Arc::new(order_repo))
        .specification_repo(Arc::new(specification_repo()))
        .build()
}

fn command(type_ram_id: u32, storage_tb: u32, transfer_gb: u64) -> CandidateOrder {
    CandidateOrder {
        type_ram_id,
        storage_tb,
        transfer_gb,
    }
}

#[tokio::test]
async fn quote_prices_without_persisting() {
    let mut order_repo = MockOrderRepo::new();
    order_repo.expect_insert().never();
    let service = order_service(order_repo);

    let quote = service.quote(command(2, 5, 500)).await.unwrap();
    assert!(!quote.validation.storage_valid);
    assert!(quote.validation.transfer_valid);
    assert_eq!(quote.cost.ram, Decimal::from(20));
    assert_eq!(quote.cost.transfer, Decimal::new(402, 1));
}

#[tokio::test]
async fn create_persists_snapshot() {
    let user = user(false);
    let owner_id = user.id;
    let mut order_repo = MockOrderRepo::new();
    order_repo
        .expect_insert()
        .withf(move |order| {
            order.owner_id == owner_id
                && order.ram_class_id == Some(2)
                && order.ram_label == "32 GB RAM"
                && order.ram_fee == Some(Decimal::from(20))
        })
        .times(1)
        .returning(|order| Ok(order.id));
    let service = order_service(order_repo);

    let view = service.create(&user, command(2, 10, 10)).await.unwrap();
    assert_eq!(view.cost.total, Decimal::from(121));
    assert_eq!(view.order.storage_tb, 10);
}

#[tokio::test]
async fn create_rechecks_floors() {
    let mut order_repo = MockOrderRepo::new();
    order_repo.expect_insert().never();
    let service = order_service(order_repo);

    let err = service.create(&user(false), command(2, 5, 9)).await.unwrap_err();
    match err {
        OrderException::ValidationFailed { result } => {
            assert!(!result.storage_valid);
            assert!(!result.transfer_valid);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn create_with_unknown_class() {
    let mut order_repo = MockOrderRepo::new();
    order_repo.expect_insert().never();
    let service = order_service(order_repo);

    let err = service.create(&user(false), command(42, 10, 10)).await.unwrap_err();
    assert!(matches!(err, OrderException::RamClassNotFound { id: 42 }));
}

#[tokio::test]
async fn inconsistent_config_fails_fast() {
    let mut specification_repo = MockSpecificationRepo::new();
    specification_repo.expect_get_pricing_config().returning(|| {
        Ok(PricingConfig {
            transfer_limit_1: 2000,
            ..pricing()
        })
    });
    specification_repo.expect_get_catalog().returning(|| Ok(catalog()));
    let service = OrderServiceImpl::builder()
        .order_repo(Arc::new(MockOrderRepo::new()))
        .specification_repo(Arc::new(specification_repo))
        .build();

    let err = service.quote(command(1, 1, 10)).await.unwrap_err();
    assert!(matches!(err, OrderException::InvalidConfig { .. }));
}

#[tokio::test]
async fn empty_catalog_is_reported() {
    let mut specification_repo = MockSpecificationRepo::new();
    specification_repo.expect_get_pricing_config().returning(|| Ok(pricing()));
    specification_repo.expect_get_catalog().returning(|| Ok(Catalog::default()));
    let service = OrderServiceImpl::builder()
        .order_repo(Arc::new(MockOrderRepo::new()))
        .specification_repo(Arc::new(specification_repo))
        .build();

    let err = service.quote(command(1, 1, 10)).await.unwrap_err();
    assert!(matches!(err, OrderException::EmptyCatalog));
}

#[tokio::test]
async fn huge_transfer_never_panics() {
    let mut specification_repo = MockSpecificationRepo::new();
    specification_repo.expect_get_pricing_config().returning(|| {
        Ok(PricingConfig {
            transfer_rate_base: Decimal::from(5_000_000_000u64),
            transfer_factor3: Decimal::ONE,
            ..pricing()
        })
    });
    specification_repo.expect_get_catalog().returning(|| Ok(catalog()));
    let service = OrderServiceImpl::builder()
        .order_repo(Arc::new(MockOrderRepo::new()))
        .specification_repo(Arc::new(specification_repo))
        .build();
    let err = service.quote(command(1, 1, u64::MAX)).await.unwrap_err();
    assert!(matches!(err, OrderException::InvalidConfig { .. }));

    let quote = order_service(MockOrderRepo::new())
        .quote(command(1, 1, u64::MAX))
        .await
        .unwrap();
    assert!(quote.validation.transfer_valid);
    assert!(quote.cost.transfer > Decimal::from(u64::MAX / 100));
}

#[tokio::test]
async fn class_fee_beyond_the_cap_fails_fast() {
    let mut specification_repo = MockSpecificationRepo::new();
    specification_repo.expect_get_pricing_config().returning(|| Ok(pricing()));
    specification_repo.expect_get_catalog().returning(|| {
        let mut classes = catalog().classes().to_vec();
        classes[0].fee = PricingConfig::MAX_AMOUNT + Decimal::ONE;
        Ok(Catalog::new(classes))
    });
    let service = OrderServiceImpl::builder()
        .order_repo(Arc::new(MockOrderRepo::new()))
        .specification_repo(Arc::new(specification_repo))
        .build();

    let err = service.quote(command(2, 10, 10)).await.unwrap_err();
    assert!(matches!(err, OrderException::InvalidConfig { .. }));
}

#[tokio::test]
async fn list_newest_first_with_costs() {
    let user = user(false);
    let owner_id = user.id;
    let older = Order {
        id: Uuid::new_v4(),
        owner_id,
        ram_class_id: None,
        ram_label: "512 GB RAM".to_owned(),
        ram_fee: None,
        storage_tb: 2,
        transfer_gb: 10,
        created_time: Utc::now() - Duration::days(30),
    };
    let newer = Order {
        id: Uuid::new_v4(),
        owner_id,
        ram_class_id: Some(2),
        ram_label: "32 GB RAM".to_owned(),
        ram_fee: Some(Decimal::from(25)),
        storage_tb: 10,
        transfer_gb: 10,
        created_time: Utc::now(),
    };
    let orders = vec![older.clone(), newer.clone()];
    let mut order_repo = MockOrderRepo::new();
    order_repo
        .expect_get_all_by_owner()
        .withf(move |id| *id == owner_id)
        .returning(move |_| Ok(orders.clone()));
    let service = order_service(order_repo);

    let views = service.list(&user).await.unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].order.id, newer.id);
    assert_eq!(views[0].cost.ram, Decimal::from(25));
    assert_eq!(views[0].cost.total, Decimal::from(126));
    assert_eq!(views[1].order.id, older.id);
    assert_eq!(views[1].cost.ram, Decimal::ZERO);
    assert_eq!(views[1].cost.total, Decimal::from(21));
}

#[tokio::test]
async fn delete_requires_step_up() {
    let mut order_repo = MockOrderRepo::new();
    order_repo.expect_get_by_id().never();
    order_repo.expect_delete_by_id().never();
    let service = order_service(order_repo);

    let err = service.delete(&user(false), Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, OrderException::StepUpRequired));
}

#[tokio::test]
async fn delete_own_order() {
    let user = user(true);
    let catalog = catalog();
    let order = Order::accepted(user.id, &command(1, 1, 10), catalog.resolve(1).unwrap());
    let order_id = order.id;
    let mut order_repo = MockOrderRepo::new();
    order_repo.expect_get_by_id().returning(move |_| Ok(Some(order.clone())));
    order_repo
        .expect_delete_by_id()
        .withf(move |id| *id == order_id)
        .times(1)
        .returning(|_| Ok(()));
    let service = order_service(order_repo);

    service.delete(&user, order_id).await.unwrap();
}

#[tokio::test]
async fn delete_foreign_order_is_not_found() {
    let catalog = catalog();
    let order = Order::accepted(Uuid::new_v4(), &command(1, 1, 10), catalog.resolve(1).unwrap());
    let order_id = order.id;
    let mut order_repo = MockOrderRepo::new();
    order_repo.expect_get_by_id().returning(move |_| Ok(Some(order.clone())));
    order_repo.expect_delete_by_id().never();
    let service = order_service(order_repo);

    let err = service.delete(&user(true), order_id).await.unwrap_err();
    assert!(matches!(err, OrderException::OrderNotFound { id } if id == order_id));
}

#[tokio::test]
async fn specification_and_usage() {
    let catalog = catalog();
    let orders = vec![
        Order::accepted(Uuid::new_v4(), &command(1, 3, 10), catalog.resolve(1).unwrap()),
        Order::accepted(Uuid::new_v4(), &command(2, 10, 10), catalog.resolve(2).unwrap()),
    ];
    let mut order_repo = MockOrderRepo::new();
    order_repo.expect_get_all().returning(move || Ok(orders.clone()));
    let service = SpecificationServiceImpl::builder()
        .order_repo(Arc::new(order_repo))
        .specification_repo(Arc::new(specification_repo()))
        .build();

    let specification = service.get_specification().await.unwrap();
    assert_eq!(specification.ram_options.classes().len(), 2);
    assert_eq!(specification.pricing.min_order_transfer, 10);

    let usage = service.get_resource_usage().await.unwrap();
    assert_eq!(usage.instances, 2);
    assert_eq!(usage.total_storage, 13);
    assert_eq!(usage.free_instances, 4);
    assert_eq!(usage.free_storage, 87);
}
