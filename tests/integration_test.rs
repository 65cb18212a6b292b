/// Integration tests for the application layer
mod test_utilities;

use bootcamp_service::prelude::*;
use chrono::NaiveDate;
use std::time::Duration;
use test_utilities::mocks::*;

fn fan_out() -> FanOut {
    FanOut::new(5, Duration::from_millis(200))
}

fn capacity_service() -> MockCapacityAuthority {
    MockCapacityAuthority::new()
        .with_capacity(10, "Backend", vec![1, 2, 3])
        .with_capacity(20, "Databases", vec![4])
        .with_capacity(30, "Cloud", vec![])
}

fn technology_service() -> MockTechnologyAuthority {
    MockTechnologyAuthority::new()
        .with_technology(1, "Java")
        .with_technology(2, "Spring")
        .with_technology(3, "Gradle")
        .with_technology(4, "PostgreSQL")
}

fn candidate(name: &str, capacity_ids: Vec<i64>) -> Option<BootcampCandidate> {
    Some(BootcampCandidate::new(name, "Backend path", capacity_ids))
}

#[tokio::test]
async fn test_register_then_find() {
    let use_case = BootcampUseCase::new(
        InMemoryBootcampRepository::new(),
        capacity_service(),
        technology_service(),
        fan_out(),
    );

    let launch_date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let java_track = BootcampCandidate::new("Java Track", "Backend path", vec![10, 20])
        .with_launch_date(launch_date)
        .with_duration(12);

    let saved = use_case.register(Some(java_track)).await.unwrap();

    assert_eq!(saved.name, "Java Track");
    assert_eq!(saved.capacity_ids, vec![10, 20]);

    let found = use_case.find_by_id(saved.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Java Track");
    assert_eq!(found.launch_date, Some(launch_date));
    assert_eq!(found.duration, Some(12));
    assert_eq!(found.capacity_ids, vec![10, 20]);
    assert_eq!(use_case.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_register_unknown_capacity_writes_nothing() {
    let use_case = BootcampUseCase::new(
        InMemoryBootcampRepository::new(),
        capacity_service(),
        technology_service(),
        fan_out(),
    );

    let err = use_case
        .register(candidate("Java Track", vec![10, 99]))
        .await
        .unwrap_err();

    assert_eq!(err, BootcampError::CapacityNotFound);
    assert!(use_case.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_register_slow_capacity_service_writes_nothing() {
    let use_case = BootcampUseCase::new(
        InMemoryBootcampRepository::new(),
        capacity_service().with_delay_on(20),
        technology_service(),
        fan_out(),
    );

    let err = use_case
        .register(candidate("Java Track", vec![10, 20, 30]))
        .await
        .unwrap_err();

    assert!(matches!(err, BootcampError::AdapterFailure { .. }));
    assert_eq!(err.code(), "PRC501");
    assert!(use_case.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_register_duplicate_name() {
    let use_case = BootcampUseCase::new(
        InMemoryBootcampRepository::new(),
        capacity_service(),
        technology_service(),
        fan_out(),
    );

    use_case
        .register(candidate("Java Track", vec![10]))
        .await
        .unwrap();
    let err = use_case
        .register(candidate("Java Track", vec![20]))
        .await
        .unwrap_err();

    assert_eq!(err, BootcampError::AlreadyExists);
    assert_eq!(use_case.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_page_enriches_and_sorts() {
    let use_case = BootcampUseCase::new(
        InMemoryBootcampRepository::new(),
        capacity_service(),
        technology_service().with_failure_on(2),
        fan_out(),
    );
    for (name, ids) in [("C", vec![30]), ("A", vec![20, 10]), ("B", vec![10])] {
        use_case.register(candidate(name, ids)).await.unwrap();
    }

    let page = use_case
        .list_page(PageRequest::new(0, 10).unwrap(), SortBy::Name, Order::Asc)
        .await
        .unwrap();

    let names: Vec<&str> = page.content().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(page.total_elements(), 3);
    assert_eq!(page.total_pages(), 1);

    let first = &page.content()[0];
    assert_eq!(first.capacity_count, 2);
    let capacity_ids: Vec<i64> = first.capacities.iter().map(|c| c.id).collect();
    assert_eq!(capacity_ids, vec![10, 20]);

    // Technology 2 fails, so the backend capacity reports two of three
    let backend = &first.capacities[0];
    assert_eq!(backend.tech_count, 2);
    let tech_names: Vec<&str> = backend.technologies.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(tech_names, vec!["Java", "Gradle"]);
}

#[tokio::test]
async fn test_list_page_capacity_count_desc() {
    let use_case = BootcampUseCase::new(
        InMemoryBootcampRepository::new(),
        capacity_service(),
        technology_service(),
        fan_out(),
    );
    for (name, ids) in [
        ("Zeta", vec![10, 20]),
        ("Solo", vec![30]),
        ("Alpha", vec![20, 30]),
    ] {
        use_case.register(candidate(name, ids)).await.unwrap();
    }

    let page = use_case
        .list_page(PageRequest::default(), SortBy::CapacityCount, Order::Desc)
        .await
        .unwrap();

    let names: Vec<&str> = page.content().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Zeta", "Solo"]);
}

#[tokio::test]
async fn test_list_page_pagination_law() {
    let use_case = BootcampUseCase::new(
        InMemoryBootcampRepository::new(),
        capacity_service(),
        technology_service(),
        fan_out(),
    );
    for name in ["A", "B", "C", "D", "E"] {
        use_case.register(candidate(name, vec![30])).await.unwrap();
    }

    for page_number in 0..4 {
        let page = use_case
            .list_page(
                PageRequest::new(page_number, 2).unwrap(),
                SortBy::Name,
                Order::Asc,
            )
            .await
            .unwrap();

        assert_eq!(page.total_elements(), 5);
        assert_eq!(page.total_pages(), 3);
        assert!(page.content().len() <= 2);
        if page_number >= 3 {
            assert!(page.content().is_empty());
        }
    }
}

#[tokio::test]
async fn test_list_page_survives_capacity_outage() {
    use bootcamp_service::bootcamp::policies::RegistrationRules;

    // Seed the store directly: the bootcamp references a capacity that now fails
    let repository = InMemoryBootcampRepository::new();
    let new_bootcamp = RegistrationRules::validate(candidate("Java Track", vec![10, 20])).unwrap();
    repository.save(new_bootcamp).await.unwrap();

    let use_case = BootcampUseCase::new(
        repository,
        capacity_service().with_failure_on(20),
        technology_service(),
        fan_out(),
    );

    let page = use_case
        .list_page(PageRequest::default(), SortBy::Name, Order::Asc)
        .await
        .unwrap();

    let item = &page.content()[0];
    assert_eq!(item.capacity_count, 1);
    assert_eq!(item.capacities[0].name, "Backend");
}
