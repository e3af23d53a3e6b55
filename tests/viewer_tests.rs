mod support;

use crate::support::{RecordingSource, Unplugged, coordinate_grid};
use std::cell::RefCell;
use std::rc::Rc;
use volslice::{Frame, Pose, Side, SliceViewer, TextureConfig, VolumeDescriptor, VoxelGrid};

type Frames = Rc<RefCell<Vec<Frame>>>;

fn viewer() -> (SliceViewer<VoxelGrid, impl FnMut(Frame)>, Frames) {
    let frames: Frames = Rc::default();
    let sink = {
        let frames = Rc::clone(&frames);
        move |frame: Frame| frames.borrow_mut().push(frame)
    };
    let descriptor = VolumeDescriptor::isotropic(8, 8, 8).expect("valid volume");
    let viewer = SliceViewer::new(descriptor, coordinate_grid(8, 8, 8), sink, TextureConfig::default())
        .expect("valid viewer");
    (viewer, frames)
}

#[test]
fn each_new_pose_presents_a_frame() {
    let (mut viewer, frames) = viewer();
    assert_eq!(viewer.generation(), 0);
    assert_eq!(viewer.current_pose(), None);

    assert_eq!(viewer.set_pose(Pose::new(2.0, 0.0, 0.0)), Some(1));
    assert_eq!(viewer.set_pose(Pose::new(6.0, 10.0, 0.0)), Some(2));

    let frames = frames.borrow();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1].generation, 2);
    assert_eq!(frames[1].pose, Pose::new(6.0, 10.0, 0.0));
    assert!(frames.iter().all(|frame| frame.mesh(Side::Slice).is_some()));
}

#[test]
fn unchanged_pose_is_not_recomputed() {
    let (mut viewer, frames) = viewer();
    viewer.set_pose(Pose::new(4.0, 0.0, 0.0));
    assert_eq!(viewer.set_pose(Pose::new(4.0, 0.0, 0.0)), None);
    assert_eq!(viewer.generation(), 1);
    assert_eq!(frames.borrow().len(), 1);
}

#[test]
fn queued_poses_are_superseded_by_the_latest() {
    let (mut viewer, frames) = viewer();
    let sender = viewer.pose_sender();
    for step in 1..=5 {
        assert!(sender.send(Pose::new(step as volslice::float_types::Real, 0.0, 0.0)));
    }

    assert_eq!(viewer.pump(), Some(1));
    assert_eq!(viewer.pump(), None, "queue is empty");
    assert_eq!(viewer.current_pose(), Some(Pose::new(5.0, 0.0, 0.0)));

    let frames = frames.borrow();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].pose, Pose::new(5.0, 0.0, 0.0));
}

#[test]
fn only_the_latest_pose_reads_pixels() {
    let source = RecordingSource::new(coordinate_grid(8, 8, 8));
    let descriptor = VolumeDescriptor::isotropic(8, 8, 8).expect("valid volume");
    let mut presented = 0;
    let mut viewer = SliceViewer::new(descriptor, &source, |_: Frame| presented += 1, TextureConfig::default())
        .expect("valid viewer");

    let sender = viewer.pose_sender();
    sender.send(Pose::new(1.0, 0.0, 0.0));
    sender.send(Pose::new(7.0, 0.0, 0.0));
    viewer.pump();
    drop(viewer);
    assert_eq!(presented, 1);

    // at z = 7 only the back plane and the thin layer before it are visible
    let touched: Vec<u32> = source.requests.borrow().iter().map(|request| request.z).collect();
    assert!(!touched.is_empty());
    assert!(touched.iter().all(|&z| z <= 1), "stale pose was computed: {touched:?}");
}

#[test]
fn senders_outlive_the_viewer_gracefully() {
    let (viewer, _) = viewer();
    let sender = viewer.pose_sender();
    drop(viewer);
    assert!(!sender.send(Pose::default()));
}

#[test]
fn refresh_rereads_the_current_pose() {
    let source = Unplugged::new(coordinate_grid(8, 8, 8));
    let descriptor = VolumeDescriptor::isotropic(8, 8, 8).expect("valid volume");
    let frames: Frames = Rc::default();
    let sink = {
        let frames = Rc::clone(&frames);
        move |frame: Frame| frames.borrow_mut().push(frame)
    };
    let mut viewer = SliceViewer::new(descriptor, &source, sink, TextureConfig::default()).expect("valid viewer");
    assert_eq!(viewer.refresh(), None, "nothing to refresh yet");
    assert_eq!(viewer.cube().descriptor(), &descriptor);
    assert_eq!(viewer.config().max_texture_size, TextureConfig::default().max_texture_size);

    let pose = Pose::new(3.0, 10.0, 0.0);
    assert_eq!(viewer.set_pose(pose), Some(1));
    assert!(frames.borrow()[0].meshes.iter().all(|mesh| mesh.texture.is_err()));

    // same pose is skipped by set_pose but forced by refresh
    source.offline.set(false);
    assert_eq!(viewer.set_pose(pose), None);
    assert_eq!(viewer.refresh(), Some(2));
    assert_eq!(viewer.current_pose(), Some(pose));

    let frames = frames.borrow();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1].pose, pose);
    assert!(frames[1].meshes.iter().all(|mesh| mesh.texture.is_ok()));
}
