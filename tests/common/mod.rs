use std::sync::Arc;

use scolaris::Engine;
use scolaris::config::EngineConfig;
use scolaris_models::{
    Class, InstitutionId, Room, SchoolLevel, Subject, Teacher,
};
use scolaris_store::MemoryStore;

/// A seeded institution covering both homeroom and secondary levels.
#[allow(dead_code)]
pub struct TestSchool {
    pub institution_id: InstitutionId,
    pub store: Arc<MemoryStore>,
    pub engine: Engine,

    pub cp1: Class,
    pub c6a: Class,
    pub c6b: Class,
    pub tle_c: Class,

    pub salle1: Room,
    pub salle2: Room,

    pub lecture: Subject,
    pub maths_college: Subject,
    pub philo: Subject,

    pub t1: Teacher,
    pub t2: Teacher,
    pub t3: Teacher,
}

pub async fn setup_school() -> TestSchool {
    let store = Arc::new(MemoryStore::new());
    let institution_id = InstitutionId::new();

    let cp1 = store
        .add_class(Class::new(institution_id, "CP1", "Primaire CP"))
        .await;
    let c6a = store.add_class(Class::new(institution_id, "C6A", "6ème")).await;
    let c6b = store.add_class(Class::new(institution_id, "C6B", "6ème")).await;
    let tle_c = store
        .add_class(Class::new(institution_id, "Tle C", "Terminale C"))
        .await;

    let salle1 = store
        .add_room(Room::new(institution_id, "Salle 1", "salle de classe", 40))
        .await;
    let salle2 = store
        .add_room(Room::new(institution_id, "Salle 2", "salle de classe", 40))
        .await;

    let lecture = store
        .add_subject(Subject::new(
            institution_id,
            "Lecture",
            "LEC",
            SchoolLevel::Primary,
            2,
        ))
        .await;
    let maths_college = store
        .add_subject(Subject::new(
            institution_id,
            "Mathématiques",
            "MATH",
            SchoolLevel::LowerSecondary,
            4,
        ))
        .await;
    let philo = store
        .add_subject(Subject::new(
            institution_id,
            "Philosophie",
            "PHILO",
            SchoolLevel::UpperSecondary,
            3,
        ))
        .await;

    let t1 = store
        .add_teacher(Teacher::new(institution_id, "Mme Diop", 24))
        .await;
    let t2 = store
        .add_teacher(Teacher::new(institution_id, "M. Ndiaye", 18))
        .await;
    let t3 = store
        .add_teacher(Teacher::new(institution_id, "M. Ba", 18))
        .await;

    let engine = Engine::with_store(EngineConfig::default(), store.clone());

    TestSchool {
        institution_id,
        store,
        engine,
        cp1,
        c6a,
        c6b,
        tle_c,
        salle1,
        salle2,
        lecture,
        maths_college,
        philo,
        t1,
        t2,
        t3,
    }
}
