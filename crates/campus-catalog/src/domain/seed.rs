//! The fixed catalog loaded at startup.

use super::event::Event;
use super::venue::Venue;

/// The events available from process start, in listing order.
#[must_use]
pub fn events() -> Vec<Event> {
    vec![
        Event::new(
            "techfest2024",
            "TechFest 2024",
            "2024-03-15",
            "10:00-17:00",
            "Main Auditorium",
            "Annual technical festival featuring coding competitions, robotics, and tech talks",
            500,
        ),
        Event::new(
            "hackathon_spring",
            "Spring Hackathon 2024",
            "2024-04-20",
            "09:00-21:00",
            "Computer Lab 1",
            "24-hour coding hackathon with prizes",
            100,
        ),
        Event::new(
            "ai_workshop",
            "AI & Machine Learning Workshop",
            "2024-03-25",
            "14:00-17:00",
            "Seminar Hall B",
            "Hands-on workshop on building AI applications",
            50,
        ),
        Event::new(
            "robotics_demo",
            "Robotics Club Demo Day",
            "2024-04-05",
            "15:00-18:00",
            "Engineering Workshop",
            "Showcase of student robotics projects",
            200,
        ),
    ]
}

/// The venues available from process start, in listing order.
#[must_use]
pub fn venues() -> Vec<Venue> {
    vec![
        Venue::new(
            "aud_main",
            "Main Auditorium",
            500,
            ["Projector", "Sound System", "AC", "Stage"],
        ),
        Venue::new(
            "lab_cs1",
            "Computer Lab 1",
            60,
            ["Computers", "Projector", "Whiteboard", "AC"],
        ),
        Venue::new(
            "lab_cs2",
            "Computer Lab 2",
            60,
            ["Computers", "Projector", "Whiteboard"],
        ),
        Venue::new(
            "seminar_a",
            "Seminar Hall A",
            100,
            ["Projector", "Sound System", "AC"],
        ),
        Venue::new(
            "seminar_b",
            "Seminar Hall B",
            80,
            ["Projector", "Whiteboard", "AC"],
        ),
        Venue::new(
            "workshop",
            "Engineering Workshop",
            150,
            ["Workbenches", "Tools", "Display Boards"],
        ),
    ]
}
