use myway_core::{
    open_store_in_memory, ClassDraft, ClassTime, DashboardService, Modality, ProfileRepository,
    ScheduleRepository, TaskRepository, Weekday,
};

#[test]
fn empty_store_yields_an_empty_overview() {
    let store = open_store_in_memory().unwrap();
    let service = DashboardService::new(&store);

    let overview = service.overview(Weekday::Monday).unwrap();

    assert_eq!(overview.total_tasks, 0);
    assert_eq!(overview.completed_tasks, 0);
    assert_eq!(overview.completion_percent, 0);
    assert!(overview.preview.is_empty());
    assert!(overview.today_classes.is_empty());
    assert_eq!(overview.profile_image, None);
}

#[test]
fn overview_counts_tasks_and_rounds_completion() {
    let store = open_store_in_memory().unwrap();
    let tasks = TaskRepository::new(&store);

    let done = tasks.add("Done already").unwrap().unwrap();
    tasks.add("Still open").unwrap();
    tasks.add("Also open").unwrap();
    tasks.toggle(done.id).unwrap();

    let overview = DashboardService::new(&store)
        .overview(Weekday::Tuesday)
        .unwrap();

    assert_eq!(overview.total_tasks, 3);
    assert_eq!(overview.completed_tasks, 1);
    assert_eq!(overview.completion_percent, 33);
}

#[test]
fn preview_caps_at_three_tasks_in_list_order() {
    let store = open_store_in_memory().unwrap();
    let tasks = TaskRepository::new(&store);

    for text in ["one", "two", "three", "four", "five"] {
        tasks.add(text).unwrap();
    }

    let overview = DashboardService::new(&store)
        .overview(Weekday::Sunday)
        .unwrap();

    assert_eq!(overview.total_tasks, 5);
    let preview: Vec<&str> = overview.preview.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(preview, ["one", "two", "three"]);
}

#[test]
fn overview_shows_only_todays_classes_sorted() {
    let store = open_store_in_memory().unwrap();
    let schedule = ScheduleRepository::new(&store);

    schedule
        .add_class(Weekday::Monday, &draft("Late", "15:00", "16:00"))
        .unwrap();
    schedule
        .add_class(Weekday::Monday, &draft("Early", "08:30", "09:45"))
        .unwrap();
    schedule
        .add_class(Weekday::Tuesday, &draft("Other day", "10:00", "11:00"))
        .unwrap();

    let overview = DashboardService::new(&store)
        .overview(Weekday::Monday)
        .unwrap();

    let courses: Vec<&str> = overview
        .today_classes
        .iter()
        .map(|c| c.course.as_str())
        .collect();
    assert_eq!(courses, ["Early", "Late"]);
}

#[test]
fn profile_image_flows_into_the_overview() {
    let store = open_store_in_memory().unwrap();
    let profile = ProfileRepository::new(&store);

    assert_eq!(profile.image().unwrap(), None);

    profile.set_image("data:image/png;base64,QUJD").unwrap();
    let overview = DashboardService::new(&store)
        .overview(Weekday::Saturday)
        .unwrap();
    assert_eq!(
        overview.profile_image.as_deref(),
        Some("data:image/png;base64,QUJD")
    );

    profile.clear_image().unwrap();
    assert_eq!(profile.image().unwrap(), None);
}

fn draft(course: &str, start: &str, end: &str) -> ClassDraft {
    ClassDraft {
        course: course.to_string(),
        start_time: ClassTime::parse(start).unwrap(),
        end_time: ClassTime::parse(end).unwrap(),
        modality: Modality::InPerson,
    }
}
