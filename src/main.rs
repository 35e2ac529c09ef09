fn main() -> anyhow::Result<()> {
    voxel_editor::app::run()
}
